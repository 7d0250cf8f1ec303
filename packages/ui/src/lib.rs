//! This crate contains all shared UI for the workspace: the session
//! context, the route guard, the resource card with its optimistic
//! like/bookmark machinery, and small form/feedback primitives.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    apply_identity, complete_login, complete_logout, use_api, use_session, use_session_service,
    SessionProvider, SessionState,
};

mod guard;
pub use guard::{decide, Guard, GuardOutcome, Requirement};

mod optimistic;
pub use optimistic::{OptimisticToggle, TogglePhase};

mod resource_card;
pub use resource_card::ResourceCard;

mod components;
pub use components::{Alert, AlertVariant, EmptyState, Spinner};

mod browser;
pub use browser::{open_in_new_tab, save_file};
