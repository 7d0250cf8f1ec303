//! Card for a single resource: classification badges, uploader line, and
//! the like/bookmark/view/download actions.

use api::{Resource, ResourceType};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBookmark, FaDownload, FaEye, FaHeart};
use dioxus_free_icons::Icon;

use crate::auth::{use_api, use_session};
use crate::browser;
use crate::components::{Alert, AlertVariant};
use crate::optimistic::OptimisticToggle;

fn type_badge_class(kind: ResourceType) -> &'static str {
    match kind {
        ResourceType::Notes => "badge badge-primary",
        ResourceType::Assignment => "badge badge-secondary",
        ResourceType::Pyq => "badge badge-success",
        ResourceType::Lab => "badge badge-warning",
    }
}

/// Resource card with optimistic like/bookmark toggles.
///
/// Unauthenticated clicks on the toggles surface an inline notice instead
/// of issuing a request. `on_unbookmarked` fires after the server confirms
/// a bookmark removal, letting the bookmarks page drop the card.
#[component]
pub fn ResourceCard(resource: Resource, on_unbookmarked: Option<EventHandler<String>>) -> Element {
    let state = use_session();
    let client = use_api();

    let (initially_liked, initially_bookmarked) = match state().identity() {
        Some(identity) => (
            identity.has_liked(&resource.id),
            identity.has_bookmarked(&resource.id),
        ),
        None => (false, false),
    };
    let mut like = use_signal(|| OptimisticToggle::new(initially_liked, resource.likes_count));
    let mut bookmark = use_signal(|| OptimisticToggle::new(initially_bookmarked, 0));
    let mut notice = use_signal(|| Option::<String>::None);
    let mut downloading = use_signal(|| false);

    let like_client = client.clone();
    let like_id = resource.id.clone();
    let on_like = move |_| {
        if !state().is_authenticated() {
            notice.set(Some("Log in to like resources.".to_string()));
            return;
        }
        if !like.write().begin() {
            return;
        }
        let client = like_client.clone();
        let resource_id = like_id.clone();
        spawn(async move {
            match client.toggle_like(&resource_id).await {
                Ok(truth) => like.write().confirm(truth.liked, truth.likes_count),
                Err(err) => {
                    like.write().rollback();
                    if !err.is_unauthorized() {
                        notice.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let bookmark_client = client.clone();
    let bookmark_id = resource.id.clone();
    let on_bookmark = move |_| {
        if !state().is_authenticated() {
            notice.set(Some("Log in to bookmark resources.".to_string()));
            return;
        }
        if !bookmark.write().begin() {
            return;
        }
        let client = bookmark_client.clone();
        let resource_id = bookmark_id.clone();
        spawn(async move {
            match client.toggle_bookmark(&resource_id).await {
                Ok(truth) => {
                    bookmark.write().settle(truth.bookmarked);
                    if !truth.bookmarked {
                        if let Some(removed) = on_unbookmarked {
                            removed.call(resource_id);
                        }
                    }
                }
                Err(err) => {
                    bookmark.write().rollback();
                    if !err.is_unauthorized() {
                        notice.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let view_url = resource.file_id.as_ref().map(|id| client.file_url(id));
    let on_view = move |_| {
        if let Some(url) = &view_url {
            browser::open_in_new_tab(url);
        }
    };

    let download_client = client;
    let download_id = resource.file_id.clone();
    let download_name = resource
        .file_name
        .clone()
        .unwrap_or_else(|| "document.pdf".to_string());
    let on_download = move |_| {
        let Some(file_id) = download_id.clone() else {
            return;
        };
        if downloading() {
            return;
        }
        downloading.set(true);
        let client = download_client.clone();
        let file_name = download_name.clone();
        spawn(async move {
            match client.download_file(&file_id).await {
                Ok(bytes) => browser::save_file(&file_name, &bytes),
                Err(err) => {
                    if !err.is_unauthorized() {
                        notice.set(Some(err.message()));
                    }
                }
            }
            downloading.set(false);
        });
    };

    let has_file = resource.file_id.is_some();

    rsx! {
        div {
            class: "card",

            div {
                class: "card-header",
                div {
                    class: "flex-between",
                    h3 { class: "card-title", "{resource.title}" }
                    span { class: type_badge_class(resource.kind), "{resource.kind}" }
                }
            }

            div {
                class: "card-body",
                p { class: "card-description", "{resource.description}" }

                div {
                    class: "badge-row",
                    span { class: "badge badge-muted", "{resource.branch}" }
                    span { class: "badge badge-muted", "Sem {resource.semester}" }
                    span { class: "badge badge-muted", "{resource.subject}" }
                }

                if let Some(uploader) = &resource.uploaded_by {
                    p {
                        class: "card-meta",
                        "Uploaded by: "
                        strong { "{uploader.name}" }
                    }
                }

                if let Some(message) = notice() {
                    Alert {
                        variant: AlertVariant::Error,
                        on_dismiss: move |_| notice.set(None),
                        "{message}"
                    }
                }
            }

            div {
                class: "card-footer",
                div {
                    class: "card-actions",
                    button {
                        class: if like().active() { "btn btn-sm btn-icon btn-outline liked" } else { "btn btn-sm btn-icon btn-outline" },
                        title: "Like",
                        disabled: like().is_pending(),
                        onclick: on_like,
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        span { class: "like-count", "{like().count()}" }
                    }
                    button {
                        class: if bookmark().active() { "btn btn-sm btn-icon btn-outline bookmarked" } else { "btn btn-sm btn-icon btn-outline" },
                        title: "Bookmark",
                        disabled: bookmark().is_pending(),
                        onclick: on_bookmark,
                        Icon { icon: FaBookmark, width: 14, height: 14 }
                    }
                }

                if has_file {
                    div {
                        class: "card-actions",
                        button {
                            class: "btn btn-sm btn-outline",
                            onclick: on_view,
                            Icon { icon: FaEye, width: 14, height: 14 }
                            " View"
                        }
                        button {
                            class: "btn btn-sm btn-primary",
                            disabled: downloading(),
                            onclick: on_download,
                            Icon { icon: FaDownload, width: 14, height: 14 }
                            if downloading() { " Downloading..." } else { " Download" }
                        }
                    }
                }
            }
        }
    }
}
