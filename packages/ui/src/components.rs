//! Small shared presentational pieces: inline alerts, the loading
//! spinner, and the empty-state placeholder.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    Error,
    Success,
    Info,
}

impl AlertVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
            Self::Info => "alert alert-info",
        }
    }
}

/// Inline banner for local success/error feedback. When `on_dismiss` is
/// provided a close button is rendered.
#[component]
pub fn Alert(
    variant: AlertVariant,
    on_dismiss: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: variant.class(),
            div { class: "alert-body", {children} }
            if let Some(dismiss) = on_dismiss {
                button {
                    class: "alert-dismiss",
                    title: "Dismiss",
                    onclick: move |_| dismiss.call(()),
                    "×"
                }
            }
        }
    }
}

/// Loading indicator shown while a request is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner" }
    }
}

/// Placeholder for an empty list.
#[component]
pub fn EmptyState(icon: String, title: String, text: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-state-icon", "{icon}" }
            h2 { class: "empty-state-title", "{title}" }
            p { class: "empty-state-text", "{text}" }
        }
    }
}
