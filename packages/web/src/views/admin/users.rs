//! User management: table of accounts with edit and delete.

use dioxus::prelude::*;
use session::Identity;
use ui::{use_api, Alert, AlertVariant, EmptyState, Guard, Requirement, Spinner};

use super::EditUserDialog;

#[component]
pub fn UserManagement() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Admin,
            UserTable {}
        }
    }
}

#[component]
fn UserTable() -> Element {
    let client = use_api();
    let mut users = use_signal(Vec::<Identity>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirming = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);
    // Id of the user open in the edit dialog.
    let mut editing = use_signal(|| Option::<String>::None);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.users().await {
                Ok(list) => users.set(list),
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
    let on_delete = use_callback(move |user_id: String| {
        if deleting() {
            return;
        }
        deleting.set(true);
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_user(&user_id).await {
                Ok(()) => users.write().retain(|u| u.id != user_id),
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

    let on_updated = use_callback(move |updated: Identity| {
        let mut list = users.write();
        if let Some(row) = list.iter_mut().find(|u| u.id == updated.id) {
            *row = updated;
        }
    });

    rsx! {
        div {
            class: "container page-top",
            h1 { class: "page-title", "User Management" }

            if let Some(text) = error() {
                Alert {
                    variant: AlertVariant::Error,
                    on_dismiss: move |_| error.set(None),
                    "{text}"
                }
            }

            if loading() {
                Spinner {}
            } else if users().is_empty() {
                EmptyState {
                    icon: "👥",
                    title: "No users found",
                    text: "Registered users will show up here",
                }
            } else {
                p {
                    class: "result-count",
                    if users().len() == 1 { "1 registered user" } else { "{users().len()} registered users" }
                }
                div {
                    class: "card",
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Branch" }
                                th { "Semester" }
                                th { "Status" }
                                th { class: "cell-center", "Actions" }
                            }
                        }
                        tbody {
                            for user in users() {
                                tr {
                                    key: "{user.id}",
                                    td { strong { "{user.name}" } }
                                    td { class: "cell-muted", "{user.email}" }
                                    td {
                                        if let Some(branch) = user.branch {
                                            span { class: "badge badge-muted", "{branch}" }
                                        }
                                    }
                                    td {
                                        if let Some(sem) = user.semester {
                                            span { class: "badge badge-muted", "Sem {sem}" }
                                        }
                                    }
                                    td {
                                        span { class: "badge badge-muted", "{user.account_status.as_str()}" }
                                    }
                                    td {
                                        class: "cell-center",
                                        div {
                                            class: "card-actions",
                                            button {
                                                class: "btn btn-sm btn-outline",
                                                onclick: {
                                                    let id = user.id.clone();
                                                    move |_| editing.set(Some(id.clone()))
                                                },
                                                "Edit"
                                            }
                                            if confirming() == Some(user.id.clone()) {
                                                button {
                                                    class: "btn btn-sm btn-danger",
                                                    disabled: deleting(),
                                                    onclick: {
                                                        let id = user.id.clone();
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
                                                        let id = user.id.clone();
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

            if let Some(user_id) = editing() {
                EditUserDialog {
                    user_id,
                    on_close: move |_| editing.set(None),
                    on_updated,
                }
            }
        }
    }
}
