//! Pending queue: approve or reject uploads awaiting review.

use api::Resource;
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, EmptyState, Guard, Requirement, Spinner};

#[component]
pub fn PendingResources() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Admin,
            PendingQueue {}
        }
    }
}

#[component]
fn PendingQueue() -> Element {
    let client = use_api();
    let mut resources = use_signal(Vec::<Resource>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    // Id of the row whose approve/reject request is in flight.
    let mut acting_on = use_signal(|| Option::<String>::None);
    // Id of the row showing the inline rejection-reason form.
    let mut rejecting = use_signal(|| Option::<String>::None);
    let mut reason = use_signal(String::new);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.pending_resources().await {
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

    let approve_client = client.clone();
    let on_approve = use_callback(move |resource_id: String| {
        if acting_on().is_some() {
            return;
        }
        acting_on.set(Some(resource_id.clone()));
        let client = approve_client.clone();
        spawn(async move {
            match client.approve_resource(&resource_id).await {
                Ok(()) => resources.write().retain(|r| r.id != resource_id),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            acting_on.set(None);
        });
    });

    let reject_client = client;
    let on_reject = use_callback(move |resource_id: String| {
        let text = reason().trim().to_string();
        if text.is_empty() {
            error.set(Some("A rejection reason is required".to_string()));
            return;
        }
        if acting_on().is_some() {
            return;
        }
        acting_on.set(Some(resource_id.clone()));
        let client = reject_client.clone();
        spawn(async move {
            match client.reject_resource(&resource_id, text).await {
                Ok(()) => {
                    resources.write().retain(|r| r.id != resource_id);
                    rejecting.set(None);
                    reason.set(String::new());
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            acting_on.set(None);
        });
    });

    rsx! {
        div {
            class: "container page-top",
            h1 { class: "page-title", "Pending Resources" }

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
                    icon: "✅",
                    title: "All caught up!",
                    text: "No pending resources to review",
                }
            } else {
                p {
                    class: "result-count",
                    if resources().len() == 1 { "1 resource awaiting review" } else { "{resources().len()} resources awaiting review" }
                }
                div {
                    class: "grid",
                    for resource in resources() {
                        div {
                            key: "{resource.id}",
                            class: "card",
                            div {
                                class: "flex-between",
                                h3 { class: "card-title", "{resource.title}" }
                                span { class: "badge badge-warning", "PENDING" }
                            }
                            p { class: "card-description", "{resource.description}" }
                            div {
                                class: "badge-row",
                                span { class: "badge badge-muted", "{resource.kind}" }
                                span { class: "badge badge-muted", "{resource.branch}" }
                                span { class: "badge badge-muted", "Sem {resource.semester}" }
                                span { class: "badge badge-muted", "{resource.subject}" }
                            }
                            if let Some(uploader) = &resource.uploaded_by {
                                p { class: "card-meta", "Uploaded by: " strong { "{uploader.name}" } }
                            }

                            if rejecting() == Some(resource.id.clone()) {
                                div {
                                    class: "reject-form",
                                    input {
                                        r#type: "text",
                                        class: "form-input",
                                        placeholder: "Reason for rejection",
                                        value: reason(),
                                        oninput: move |evt| reason.set(evt.value()),
                                    }
                                    div {
                                        class: "card-actions",
                                        button {
                                            class: "btn btn-sm btn-danger",
                                            disabled: acting_on().is_some(),
                                            onclick: {
                                                let id = resource.id.clone();
                                                move |_| on_reject.call(id.clone())
                                            },
                                            "Confirm Reject"
                                        }
                                        button {
                                            class: "btn btn-sm btn-outline",
                                            onclick: move |_| {
                                                rejecting.set(None);
                                                reason.set(String::new());
                                            },
                                            "Cancel"
                                        }
                                    }
                                }
                            } else {
                                div {
                                    class: "card-actions",
                                    button {
                                        class: "btn btn-sm btn-primary",
                                        disabled: acting_on().is_some(),
                                        onclick: {
                                            let id = resource.id.clone();
                                            move |_| on_approve.call(id.clone())
                                        },
                                        if acting_on() == Some(resource.id.clone()) { "Working..." } else { "Approve" }
                                    }
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: {
                                            let id = resource.id.clone();
                                            move |_| {
                                                reason.set(String::new());
                                                rejecting.set(Some(id.clone()));
                                            }
                                        },
                                        "Reject"
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
