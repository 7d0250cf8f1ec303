//! Rejected queue: turned-down uploads with their reasons.

use api::Resource;
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, EmptyState, Guard, Requirement, Spinner};

#[component]
pub fn RejectedResources() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Admin,
            RejectedQueue {}
        }
    }
}

#[component]
fn RejectedQueue() -> Element {
    let client = use_api();
    let mut resources = use_signal(Vec::<Resource>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirming = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.rejected_resources().await {
                Ok(list) => resources.set(list),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            loading.set(false);
        }
    });

    let delete_client = client;
    let on_delete = use_callback(move |resource_id: String| {
        if deleting() {
            return;
        }
        deleting.set(true);
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_resource(&resource_id).await {
                Ok(()) => resources.write().retain(|r| r.id != resource_id),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            confirming.set(None);
            deleting.set(false);
        });
    });

    rsx! {
        div {
            class: "container page-top",
            h1 { class: "page-title", "Rejected Resources" }

            if let Some(text) = error() {
                Alert {
                    variant: AlertVariant::Error,
                    on_dismiss: move |_| error.set(None),
                    "{text}"
                }
            }

            if loading() {
                Spinner {}
            } else if resources().is_empty() {
                EmptyState {
                    icon: "🗂️",
                    title: "No rejected resources",
                    text: "Rejected uploads will show up here",
                }
            } else {
                div {
                    class: "grid",
                    for resource in resources() {
                        div {
                            key: "{resource.id}",
                            class: "card",
                            div {
                                class: "flex-between",
                                h3 { class: "card-title", "{resource.title}" }
                                span { class: "badge badge-error", "REJECTED" }
                            }
                            p { class: "card-description", "{resource.description}" }
                            div {
                                class: "badge-row",
                                span { class: "badge badge-muted", "{resource.kind}" }
                                span { class: "badge badge-muted", "{resource.branch}" }
                                span { class: "badge badge-muted", "Sem {resource.semester}" }
                                span { class: "badge badge-muted", "{resource.subject}" }
                            }
                            if let Some(reason) = &resource.rejection_reason {
                                Alert {
                                    variant: AlertVariant::Error,
                                    strong { "Rejection reason: " }
                                    "{reason}"
                                }
                            }
                            div {
                                class: "card-actions",
                                if confirming() == Some(resource.id.clone()) {
                                    button {
                                        class: "btn btn-sm btn-danger",
                                        disabled: deleting(),
                                        onclick: {
                                            let id = resource.id.clone();
                                            move |_| on_delete.call(id.clone())
                                        },
                                        if deleting() { "Deleting..." } else { "Really delete?" }
                                    }
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: move |_| confirming.set(None),
                                        "Cancel"
                                    }
                                } else {
                                    button {
                                        class: "btn btn-sm btn-outline btn-danger-outline",
                                        onclick: {
                                            let id = resource.id.clone();
                                            move |_| confirming.set(Some(id.clone()))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
