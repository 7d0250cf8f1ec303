pub mod models;

mod service;
pub use service::{SessionBackend, SessionService};

mod memory;
pub use memory::MemoryBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::LocalStorageBackend;

pub use models::{
    AccountStatus, Branch, Identity, ProfileVisibility, Role, SocialLinks, StoredSession,
};
