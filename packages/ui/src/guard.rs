//! Route guard: access control at the presentation boundary.
//!
//! The decision is purely a function of current session-store state — no
//! network call, made once per navigation. [`decide`] is the testable
//! core; [`Guard`] translates its outcome into a render or a redirect.

use dioxus::prelude::*;

use crate::auth::{use_session, SessionState};

/// Authentication level a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Any logged-in user.
    Authenticated,
    /// Logged in with the admin role.
    Admin,
}

/// Outcome of a guard check. Each variant is terminal for the navigation
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested content.
    Allow,
    /// Session absent: go to the login route.
    RedirectLogin,
    /// Session present but the role is insufficient: go home.
    RedirectHome,
}

pub fn decide(state: &SessionState, requirement: Requirement) -> GuardOutcome {
    let Some(identity) = state.identity() else {
        return GuardOutcome::RedirectLogin;
    };
    match requirement {
        Requirement::Authenticated => GuardOutcome::Allow,
        Requirement::Admin if identity.role.is_admin() => GuardOutcome::Allow,
        Requirement::Admin => GuardOutcome::RedirectHome,
    }
}

/// Wrapper that renders its children only when the session satisfies the
/// requirement, replacing the history entry with the redirect target
/// otherwise (so "back" does not bounce through the protected route).
#[component]
pub fn Guard(requirement: Requirement, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    match decide(&session(), requirement) {
        GuardOutcome::Allow => rsx! {
            {children}
        },
        GuardOutcome::RedirectLogin => {
            nav.replace("/login");
            rsx! {}
        }
        GuardOutcome::RedirectHome => {
            nav.replace("/");
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::{Identity, Role, StoredSession};

    fn state_with(role: Option<Role>) -> SessionState {
        let session = role.map(|role| {
            let identity: Identity = serde_json::from_value(serde_json::json!({
                "_id": "u-1",
                "name": "Asha Patel",
                "email": "asha@college.edu",
                "role": role.as_str(),
            }))
            .unwrap();
            StoredSession {
                credential: "tok".to_string(),
                identity,
            }
        });
        SessionState {
            session,
            invalidated: false,
        }
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let state = state_with(None);
        assert_eq!(
            decide(&state, Requirement::Authenticated),
            GuardOutcome::RedirectLogin
        );
        assert_eq!(decide(&state, Requirement::Admin), GuardOutcome::RedirectLogin);
    }

    #[test]
    fn test_student_passes_authenticated_but_not_admin() {
        let state = state_with(Some(Role::Student));
        assert_eq!(
            decide(&state, Requirement::Authenticated),
            GuardOutcome::Allow
        );
        assert_eq!(decide(&state, Requirement::Admin), GuardOutcome::RedirectHome);
    }

    #[test]
    fn test_admin_passes_everything() {
        let state = state_with(Some(Role::Admin));
        assert_eq!(
            decide(&state, Requirement::Authenticated),
            GuardOutcome::Allow
        );
        assert_eq!(decide(&state, Requirement::Admin), GuardOutcome::Allow);
    }
}
