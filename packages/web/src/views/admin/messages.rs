//! Contact inbox: triage messages submitted through the public contact
//! form. Opening an unread message marks it read.

use api::{ContactMessage, MessageStatus};
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, EmptyState, Guard, Requirement, Spinner};

fn status_badge_class(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Unread => "badge badge-error",
        MessageStatus::Read => "badge badge-warning",
        MessageStatus::Replied => "badge badge-success",
        MessageStatus::Archived => "badge badge-muted",
    }
}

#[component]
pub fn ContactMessages() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Admin,
            Inbox {}
        }
    }
}

#[component]
fn Inbox() -> Element {
    let client = use_api();
    let mut messages = use_signal(Vec::<ContactMessage>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    // None = all messages; Some(status) = that tab.
    let mut filter = use_signal(|| Option::<MessageStatus>::None);
    let mut selected = use_signal(|| Option::<ContactMessage>::None);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            match client.contact_messages().await {
                Ok(list) => messages.set(list),
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            loading.set(false);
        }
    });

    // Opening an unread message marks it read on the server.
    let open_client = client.clone();
    let on_open = use_callback(move |message: ContactMessage| {
        let client = open_client.clone();
        spawn(async move {
            if message.status == MessageStatus::Unread {
                if client
                    .set_message_status(&message.id, MessageStatus::Read)
                    .await
                    .is_ok()
                {
                    let mut opened = message.clone();
                    opened.status = MessageStatus::Read;
                    if let Some(row) = messages.write().iter_mut().find(|m| m.id == message.id) {
                        row.status = MessageStatus::Read;
                    }
                    selected.set(Some(opened));
                    return;
                }
            }
            selected.set(Some(message));
        });
    });

    let status_client = client.clone();
    let on_set_status = use_callback(move |(message_id, status): (String, MessageStatus)| {
        let client = status_client.clone();
        spawn(async move {
            match client.set_message_status(&message_id, status).await {
                Ok(()) => {
                    if let Some(row) = messages.write().iter_mut().find(|m| m.id == message_id) {
                        row.status = status;
                    }
                    if let Some(mut open) = selected() {
                        if open.id == message_id {
                            open.status = status;
                            selected.set(Some(open));
                        }
                    }
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    });

    let delete_client = client;
    let on_delete = use_callback(move |message_id: String| {
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_message(&message_id).await {
                Ok(()) => {
                    messages.write().retain(|m| m.id != message_id);
                    if selected().is_some_and(|m| m.id == message_id) {
                        selected.set(None);
                    }
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    });

    let visible: Vec<ContactMessage> = match filter() {
        None => messages(),
        Some(status) => messages()
            .into_iter()
            .filter(|m| m.status == status)
            .collect(),
    };
    let tabs: Vec<(MessageStatus, usize)> = MessageStatus::ALL
        .into_iter()
        .map(|status| {
            let count = messages().iter().filter(|m| m.status == status).count();
            (status, count)
        })
        .collect();

    rsx! {
        div {
            class: "container page-top",
            h1 { class: "page-title", "Contact Messages" }

            if let Some(text) = error() {
                Alert {
                    variant: AlertVariant::Error,
                    on_dismiss: move |_| error.set(None),
                    "{text}"
                }
            }

            div {
                class: "tab-row",
                button {
                    class: if filter().is_none() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
                    onclick: move |_| filter.set(None),
                    "All ({messages().len()})"
                }
                for (status, count) in tabs {
                    button {
                        class: if filter() == Some(status) { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status.as_str()} ({count})"
                    }
                }
            }

            if loading() {
                Spinner {}
            } else if visible.is_empty() {
                EmptyState {
                    icon: "📬",
                    title: "No messages",
                    text: "Nothing in this tab right now",
                }
            } else {
                div {
                    class: "grid",
                    for message in visible {
                        div {
                            key: "{message.id}",
                            class: if message.status == MessageStatus::Unread { "card message-card message-unread" } else { "card message-card" },
                            onclick: {
                                let message = message.clone();
                                move |_| on_open.call(message.clone())
                            },
                            div {
                                class: "flex-between",
                                div {
                                    h3 { class: "card-title", "{message.subject}" }
                                    p { class: "card-meta", "{message.name} <{message.email}" ">" }
                                }
                                span {
                                    class: status_badge_class(message.status),
                                    "{message.status.as_str().to_uppercase()}"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(message) = selected() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| selected.set(None),
                    div {
                        class: "modal",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                        div {
                            class: "flex-between",
                            h2 { "{message.subject}" }
                            span {
                                class: status_badge_class(message.status),
                                "{message.status.as_str().to_uppercase()}"
                            }
                        }
                        p { class: "card-meta", "From: {message.name} <{message.email}" ">" }
                        if let Some(category) = &message.category {
                            p { class: "card-meta", "Category: {category}" }
                        }
                        p { class: "message-body", "{message.message}" }

                        div {
                            class: "card-actions",
                            if message.status != MessageStatus::Replied {
                                button {
                                    class: "btn btn-sm btn-primary",
                                    onclick: {
                                        let id = message.id.clone();
                                        move |_| on_set_status.call((id.clone(), MessageStatus::Replied))
                                    },
                                    "Mark Replied"
                                }
                            }
                            if message.status != MessageStatus::Archived {
                                button {
                                    class: "btn btn-sm btn-outline",
                                    onclick: {
                                        let id = message.id.clone();
                                        move |_| on_set_status.call((id.clone(), MessageStatus::Archived))
                                    },
                                    "Archive"
                                }
                            }
                            button {
                                class: "btn btn-sm btn-danger",
                                onclick: {
                                    let id = message.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                "Delete"
                            }
                            button {
                                class: "btn btn-sm btn-outline",
                                onclick: move |_| selected.set(None),
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}
