use dioxus::prelude::*;

use ui::SessionProvider;

use navbar::Navbar;
use views::{
    AdminDashboard, ApprovedResources, Bookmarks, Contact, ContactMessages, Home, Login,
    PendingResources, Profile, RejectedResources, Signup, Upload, UserManagement,
};

mod navbar;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        // Public
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/contact")]
        Contact {},

        // Student protected
        #[route("/upload")]
        Upload {},
        #[route("/profile")]
        Profile {},
        #[route("/bookmarks")]
        Bookmarks {},

        // Admin protected
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/pending")]
        PendingResources {},
        #[route("/admin/approved")]
        ApprovedResources {},
        #[route("/admin/rejected")]
        RejectedResources {},
        #[route("/admin/users")]
        UserManagement {},
        #[route("/admin/messages")]
        ContactMessages {},

        // Anything else goes home
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Layout shared by every route: navbar on top, the session-invalidation
/// watcher alongside, page content below.
#[component]
fn Shell() -> Element {
    rsx! {
        SessionWatcher {}
        Navbar {}
        Outlet::<Route> {}
    }
}

/// Translates the adapter's session-invalidated event into navigation:
/// whenever the session store reports the credential rejected, the current
/// route is replaced with the login page, wherever the request originated.
#[component]
fn SessionWatcher() -> Element {
    let mut state = ui::use_session();
    let nav = use_navigator();

    use_effect(move || {
        if state().invalidated {
            state.write().invalidated = false;
            nav.replace(Route::Login {});
        }
    });

    rsx! {}
}

/// Redirect unmatched routes to the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    dioxus::logger::tracing::debug!(path = segments.join("/"), "unmatched route");
    nav.replace(Route::Home {});
    rsx! {}
}
