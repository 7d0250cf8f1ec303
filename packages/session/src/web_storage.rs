//! # localStorage session backend — browser-side persistence
//!
//! [`LocalStorageBackend`] is the [`SessionBackend`] implementation used on
//! the **web platform**. It persists exactly two values in the browser's
//! `localStorage`:
//!
//! | Key | Value |
//! |-----|-------|
//! | `"campusshare.token"` | the opaque bearer credential |
//! | `"campusshare.identity"` | the JSON-encoded [`Identity`] record |
//!
//! ## Error handling
//!
//! All storage failures are swallowed (reads return `None`, writes do
//! nothing). A missing `window`, a storage quota error, or a corrupted
//! identity blob degrades to "no persisted session" rather than crashing;
//! a corrupt pair is removed so the next visit starts clean.

use crate::models::StoredSession;
use crate::service::SessionBackend;

const TOKEN_KEY: &str = "campusshare.token";
const IDENTITY_KEY: &str = "campusshare.identity";

/// localStorage-backed SessionBackend for the web platform.
///
/// A zero-size struct: the storage handle is looked up per operation, which
/// keeps the type trivially `Clone` and `Send`/`Sync` (wasm is
/// single-threaded; the bounds are never exercised).
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionBackend for LocalStorageBackend {
    fn load(&self) -> Option<StoredSession> {
        let storage = storage()?;
        let credential = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_identity = storage.get_item(IDENTITY_KEY).ok().flatten()?;

        match serde_json::from_str(&raw_identity) {
            Ok(identity) => Some(StoredSession {
                credential,
                identity,
            }),
            Err(err) => {
                tracing::warn!(%err, "discarding corrupt persisted identity");
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(identity_json) = serde_json::to_string(&session.identity) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.credential);
        let _ = storage.set_item(IDENTITY_KEY, &identity_json);
    }

    fn clear(&self) {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(IDENTITY_KEY);
    }
}
