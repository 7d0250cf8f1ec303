//! Navigation shell: a pure function of the session's derived flags.

use dioxus::prelude::*;
use ui::icons::{FaBookmark, FaHouse, FaRightFromBracket, FaShieldHalved, FaUpload, FaUser};
use ui::{complete_logout, use_session, use_session_service, Icon};

use crate::Route;

#[component]
pub fn Navbar() -> Element {
    let state = use_session();
    let service = use_session_service();
    let nav = use_navigator();

    let on_logout = move |_| {
        complete_logout(state, &service);
        nav.push(Route::Login {});
    };

    let snapshot = state();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                Link { to: Route::Home {}, class: "navbar-logo",
                    span { "CampusShare" }
                }

                ul {
                    class: "navbar-links",
                    if snapshot.is_authenticated() {
                        li {
                            Link { to: Route::Home {},
                                Icon { icon: FaHouse, width: 14, height: 14 }
                                " Home"
                            }
                        }
                        if !snapshot.is_admin() {
                            li {
                                Link { to: Route::Upload {},
                                    Icon { icon: FaUpload, width: 14, height: 14 }
                                    " Upload"
                                }
                            }
                            li {
                                Link { to: Route::Bookmarks {},
                                    Icon { icon: FaBookmark, width: 14, height: 14 }
                                    " Bookmarks"
                                }
                            }
                            li {
                                Link { to: Route::Profile {},
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                    " Profile"
                                }
                            }
                        }
                        if snapshot.is_admin() {
                            li {
                                Link { to: Route::AdminDashboard {},
                                    Icon { icon: FaShieldHalved, width: 14, height: 14 }
                                    " Admin Panel"
                                }
                            }
                        }
                        li {
                            button {
                                class: "btn btn-sm btn-outline",
                                onclick: on_logout,
                                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                " Logout"
                            }
                        }
                    } else {
                        li {
                            Link { to: Route::Login {}, class: "btn btn-sm btn-secondary", "Login" }
                        }
                        li {
                            Link { to: Route::Signup {}, class: "btn btn-sm btn-primary", "Sign Up" }
                        }
                    }
                }
            }
        }
    }
}
