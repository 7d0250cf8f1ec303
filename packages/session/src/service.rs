//! The session service: process-wide authenticated-session state.
//!
//! [`SessionService`] owns the current session (credential + identity) and
//! is the only component allowed to touch durable storage. Everything else
//! gates on its derived [`is_authenticated`](SessionService::is_authenticated)
//! and [`is_admin`](SessionService::is_admin) flags.
//!
//! The service is an explicitly constructed, clonable handle rather than an
//! ambient global: callers inject a [`SessionBackend`] (browser storage in
//! the web app, [`crate::MemoryBackend`] in tests) and pass the handle to
//! whoever needs it.

use std::sync::{Arc, RwLock};

use crate::models::{Identity, StoredSession};

/// Durable storage for the session pair.
///
/// Implementations are synchronous; the only production backend is browser
/// `localStorage`, which is a synchronous API holding two small values.
pub trait SessionBackend: Send + Sync {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// Clonable handle over the in-memory session and its durable backend.
#[derive(Clone)]
pub struct SessionService {
    backend: Arc<dyn SessionBackend>,
    current: Arc<RwLock<Option<StoredSession>>>,
}

impl SessionService {
    /// Create a service with an empty in-memory session. Call
    /// [`initialize`](Self::initialize) to rehydrate a persisted one.
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Rehydrate the session persisted by a previous visit, if any.
    ///
    /// A restored session is treated as active without re-validating against
    /// the server; the first rejected request will invalidate it.
    pub fn initialize(&self) {
        let restored = self.backend.load();
        if let Some(session) = &restored {
            tracing::debug!(user = %session.identity.email, "restored persisted session");
        }
        *self.current.write().unwrap() = restored;
    }

    /// Store a fresh session, overwriting any prior one.
    pub fn login(&self, credential: String, identity: Identity) {
        tracing::info!(user = %identity.email, role = identity.role.as_str(), "session established");
        let session = StoredSession {
            credential,
            identity,
        };
        self.backend.save(&session);
        *self.current.write().unwrap() = Some(session);
    }

    /// Clear the session from memory and durable storage. Never fails and
    /// is safe to call with no session present.
    pub fn logout(&self) {
        self.backend.clear();
        *self.current.write().unwrap() = None;
    }

    /// Tear the session down because the server rejected its credential.
    pub fn invalidate(&self) {
        tracing::warn!("server rejected session credential; clearing session");
        self.logout();
    }

    /// Swap the identity for the server's updated record (profile save),
    /// keeping the credential. No-op when logged out.
    pub fn replace_identity(&self, identity: Identity) {
        let mut current = self.current.write().unwrap();
        if let Some(session) = current.as_mut() {
            session.identity = identity;
            self.backend.save(session);
        }
    }

    pub fn credential(&self) -> Option<String> {
        self.current
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.credential.clone())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.identity.clone())
    }

    pub fn snapshot(&self) -> Option<StoredSession> {
        self.current.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .read()
            .unwrap()
            .as_ref()
            .is_some_and(|s| s.identity.role.is_admin())
    }
}
