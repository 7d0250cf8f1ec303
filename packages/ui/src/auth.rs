//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] wires the three session-related objects together and
//! provides them via context: the [`SessionService`] (durable state), a
//! `Signal<SessionState>` (render state), and the [`Client`] (network).
//! The adapter's session-invalidated hook is installed here: when the
//! server rejects the credential the service has already been cleared, so
//! the hook only flips the signal; the navigation shell watches the
//! `invalidated` flag and performs the redirect.
//!
//! Components read gating flags from [`SessionState`] only — nothing else
//! may inspect durable storage.

use api::{AuthResponse, Client};
use dioxus::prelude::*;
use session::{Identity, SessionService, StoredSession};

/// Render-side view of the session store.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<StoredSession>,
    /// Set when the adapter reported the credential rejected; consumed by
    /// the shell's watcher, which redirects to the login route.
    pub invalidated: bool,
}

impl SessionState {
    fn of(service: &SessionService) -> Self {
        Self {
            session: service.snapshot(),
            invalidated: false,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|i| i.role.is_admin())
    }
}

fn make_session_service() -> SessionService {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let service = SessionService::new(session::LocalStorageBackend::new());
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let service = SessionService::new(session::MemoryBackend::new());
    service.initialize();
    service
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared HTTP client adapter.
pub fn use_api() -> Client {
    use_context::<Client>()
}

/// Get the session service itself. Only the auth helpers below should need
/// this; pages gate on [`use_session`].
pub fn use_session_service() -> SessionService {
    use_context::<SessionService>()
}

/// Provider component that owns session state for the whole application.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let service = use_hook(make_session_service);

    let snapshot = SessionState::of(&service);
    let state = use_signal(move || snapshot);

    let client = use_hook(|| {
        Client::new(api::resolve_base_url(), service.clone()).with_session_invalidated_hook(
            move || {
                // Signal is Copy; rebind mutably inside the Fn closure.
                let mut signal = state;
                signal.set(SessionState {
                    session: None,
                    invalidated: true,
                });
            },
        )
    });

    use_context_provider(|| service.clone());
    use_context_provider(|| state);
    use_context_provider(|| client);

    rsx! {
        {children}
    }
}

/// Store a fresh session after a successful login or signup response and
/// bring the render state in step.
pub fn complete_login(
    mut state: Signal<SessionState>,
    service: &SessionService,
    auth: AuthResponse,
) -> Identity {
    service.login(auth.token, auth.user.clone());
    state.set(SessionState {
        session: service.snapshot(),
        invalidated: false,
    });
    auth.user
}

/// Tear the session down (logout button). Safe to call when already
/// logged out.
pub fn complete_logout(mut state: Signal<SessionState>, service: &SessionService) {
    service.logout();
    state.set(SessionState {
        session: None,
        invalidated: false,
    });
}

/// Replace the stored identity with the server's updated record
/// (profile save).
pub fn apply_identity(
    mut state: Signal<SessionState>,
    service: &SessionService,
    identity: Identity,
) {
    service.replace_identity(identity);
    state.set(SessionState {
        session: service.snapshot(),
        invalidated: false,
    });
}
