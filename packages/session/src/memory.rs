use std::sync::{Arc, Mutex};

use crate::models::StoredSession;
use crate::service::SessionBackend;

/// In-memory SessionBackend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<StoredSession>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<StoredSession> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.slot.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identity, Role};
    use crate::service::SessionService;

    fn identity(role: Role) -> Identity {
        serde_json::from_value(serde_json::json!({
            "_id": "u-1",
            "name": "Asha Patel",
            "email": "asha@college.edu",
            "role": role.as_str(),
            "branch": "CSE",
            "semester": 4,
        }))
        .unwrap()
    }

    #[test]
    fn test_login_round_trip() {
        let service = SessionService::new(MemoryBackend::new());
        assert!(!service.is_authenticated());

        let who = identity(Role::Student);
        service.login("tok-abc".to_string(), who.clone());

        assert!(service.is_authenticated());
        assert!(!service.is_admin());
        assert_eq!(service.credential().as_deref(), Some("tok-abc"));
        assert_eq!(service.identity(), Some(who));
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let service = SessionService::new(MemoryBackend::new());
        service.login("tok-1".to_string(), identity(Role::Student));
        service.login("tok-2".to_string(), identity(Role::Admin));

        assert_eq!(service.credential().as_deref(), Some("tok-2"));
        assert!(service.is_admin());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let service = SessionService::new(MemoryBackend::new());
        service.login("tok".to_string(), identity(Role::Student));

        service.logout();
        assert!(!service.is_authenticated());

        // A second logout with no session present is a no-op, not an error.
        service.logout();
        assert!(!service.is_authenticated());
        assert!(service.credential().is_none());
    }

    #[test]
    fn test_initialize_restores_persisted_session() {
        let backend = MemoryBackend::new();
        let first = SessionService::new(backend.clone());
        first.login("tok-persist".to_string(), identity(Role::Admin));

        // A fresh service over the same backend starts empty until initialized.
        let second = SessionService::new(backend);
        assert!(!second.is_authenticated());

        second.initialize();
        assert!(second.is_authenticated());
        assert!(second.is_admin());
        assert_eq!(second.credential().as_deref(), Some("tok-persist"));
    }

    #[test]
    fn test_invalidate_drops_persisted_credential() {
        let backend = MemoryBackend::new();
        let service = SessionService::new(backend.clone());
        service.login("tok-bad".to_string(), identity(Role::Student));

        service.invalidate();

        assert!(!service.is_authenticated());
        // The rejected credential must not survive in durable storage.
        assert!(backend.load().is_none());
    }

    #[test]
    fn test_admin_flag_requires_admin_role() {
        let service = SessionService::new(MemoryBackend::new());
        assert!(!service.is_admin());

        service.login("tok".to_string(), identity(Role::Student));
        assert!(!service.is_admin());

        service.login("tok".to_string(), identity(Role::Admin));
        assert!(service.is_admin());
    }

    #[test]
    fn test_replace_identity_keeps_credential() {
        let backend = MemoryBackend::new();
        let service = SessionService::new(backend.clone());
        service.login("tok".to_string(), identity(Role::Student));

        let mut updated = identity(Role::Student);
        updated.name = "Asha P.".to_string();
        service.replace_identity(updated.clone());

        assert_eq!(service.credential().as_deref(), Some("tok"));
        assert_eq!(service.identity(), Some(updated.clone()));
        // The durable copy is updated too.
        assert_eq!(backend.load().unwrap().identity, updated);
    }

    #[test]
    fn test_replace_identity_without_session_is_noop() {
        let service = SessionService::new(MemoryBackend::new());
        service.replace_identity(identity(Role::Student));
        assert!(!service.is_authenticated());
    }
}
