//! Bookmarks page: the user's saved resources.

use api::Resource;
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, EmptyState, Guard, Requirement, ResourceCard, Spinner};

#[component]
pub fn Bookmarks() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Authenticated,
            BookmarkList {}
        }
    }
}

#[component]
fn BookmarkList() -> Element {
    let client = use_api();
    let mut bookmarks = use_signal(Vec::<Resource>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    // Load once on mount; removals below edit the signal directly.
    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match client.bookmarked_resources().await {
                Ok(list) => bookmarks.set(list),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "container",

            div {
                class: "page-hero page-hero-left",
                h1 { "My Bookmarks" }
                p { "Resources you've saved for later" }
            }

            if let Some(message) = error() {
                Alert { variant: AlertVariant::Error, "{message}" }
            }

            if loading() {
                Spinner {}
            } else if bookmarks().is_empty() {
                EmptyState {
                    icon: "🔖",
                    title: "No bookmarks yet",
                    text: "Start bookmarking resources to save them for later!",
                }
            } else {
                p {
                    class: "result-count",
                    if bookmarks().len() == 1 { "1 saved resource" } else { "{bookmarks().len()} saved resources" }
                }
                div {
                    class: "grid grid-3",
                    for resource in bookmarks() {
                        ResourceCard {
                            key: "{resource.id}",
                            resource,
                            // Drop the card once the server confirms the removal.
                            on_unbookmarked: move |resource_id: String| {
                                bookmarks.write().retain(|r| r.id != resource_id);
                            },
                        }
                    }
                }
            }
        }
    }
}
