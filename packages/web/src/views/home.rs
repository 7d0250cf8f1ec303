//! Home / browse page: approved resources with filters.

use api::{Branch, ResourceQuery, ResourceType};
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, EmptyState, ResourceCard, Spinner};

#[component]
pub fn Home() -> Element {
    let client = use_api();
    let mut branch = use_signal(|| Option::<Branch>::None);
    let mut semester = use_signal(|| Option::<u8>::None);
    let mut subject = use_signal(String::new);
    let mut kind = use_signal(|| Option::<ResourceType>::None);
    let mut search = use_signal(String::new);

    // Refetches whenever a filter signal changes.
    let resources = use_resource(move || {
        let query = ResourceQuery {
            branch: branch(),
            semester: semester(),
            subject: Some(subject()),
            kind: kind(),
            search: Some(search()),
        };
        let client = client.clone();
        async move { client.list_resources(&query).await }
    });

    let clear_filters = move |_| {
        branch.set(None);
        semester.set(None);
        subject.set(String::new());
        kind.set(None);
        search.set(String::new());
    };

    rsx! {
        div {
            class: "container",

            div {
                class: "page-hero",
                h1 { "Discover " span { class: "accent-text", "Resources" } }
                p { "Find notes, assignments, PYQs and more from your peers" }
            }

            div {
                class: "filter-container",
                div {
                    class: "flex-between",
                    h3 { "Filters" }
                    button { class: "btn btn-sm btn-outline", onclick: clear_filters, "Clear All" }
                }

                div {
                    class: "form-group",
                    input {
                        r#type: "text",
                        class: "form-input",
                        placeholder: "Search resources...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                }

                div {
                    class: "filter-grid",
                    select {
                        class: "form-select",
                        value: branch().map(|b| b.as_str()).unwrap_or(""),
                        onchange: move |evt| branch.set(Branch::from_code(&evt.value())),
                        option { value: "", "All Branches" }
                        for b in Branch::ALL {
                            option { value: b.as_str(), "{b}" }
                        }
                    }
                    select {
                        class: "form-select",
                        value: semester().map(|s| s.to_string()).unwrap_or_default(),
                        onchange: move |evt| semester.set(evt.value().parse().ok()),
                        option { value: "", "All Semesters" }
                        for sem in 1u8..=8 {
                            option { value: "{sem}", "Semester {sem}" }
                        }
                    }
                    input {
                        r#type: "text",
                        class: "form-input",
                        placeholder: "Subject (e.g., Mathematics)",
                        value: subject(),
                        oninput: move |evt| subject.set(evt.value()),
                    }
                    select {
                        class: "form-select",
                        value: kind().map(|t| t.as_str()).unwrap_or(""),
                        onchange: move |evt| kind.set(ResourceType::from_code(&evt.value())),
                        option { value: "", "All Types" }
                        for t in ResourceType::ALL {
                            option { value: t.as_str(), "{t}" }
                        }
                    }
                }
            }

            match &*resources.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState {
                        icon: "📚",
                        title: "No resources found",
                        text: "Try adjusting your filters or be the first to upload!",
                    }
                },
                Some(Ok(list)) => rsx! {
                    p {
                        class: "result-count",
                        if list.len() == 1 { "Found 1 resource" } else { "Found {list.len()} resources" }
                    }
                    div {
                        class: "grid grid-3",
                        for resource in list.clone() {
                            ResourceCard { key: "{resource.id}", resource }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    Alert { variant: AlertVariant::Error, "{err.message()}" }
                },
                None => rsx! {
                    Spinner {}
                },
            }
        }
    }
}
