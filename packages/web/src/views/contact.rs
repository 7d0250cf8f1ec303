//! Contact page: public form feeding the admin inbox.

use api::ContactRequest;
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant};

const CATEGORIES: [(&str, &str); 5] = [
    ("general", "General question"),
    ("account", "Account help"),
    ("upload", "Uploads and approval"),
    ("resources", "Resource content"),
    ("security", "Security concern"),
];

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && domain.contains('.')
    )
}

#[component]
pub fn Contact() -> Element {
    let client = use_api();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut category = use_signal(|| "general".to_string());
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(false);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let s = subject().trim().to_string();
            let m = message().trim().to_string();
            if n.is_empty() || e.is_empty() || s.is_empty() || m.is_empty() {
                error.set(Some("Please fill in all required fields".to_string()));
                return;
            }
            if !looks_like_email(&e) {
                error.set(Some("Please enter a valid email address".to_string()));
                return;
            }

            submitting.set(true);
            let request = ContactRequest {
                name: n,
                email: e,
                subject: s,
                message: m,
                category: category(),
            };
            match client.send_contact_message(&request).await {
                Ok(()) => {
                    success.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    category.set("general".to_string());
                }
                Err(err) => error.set(Some(err.message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "container container-md page-top",

            div {
                class: "page-hero",
                h1 { "Contact Us" }
                p { "Questions, feedback, or a problem with a resource? We'll respond within 24 hours." }
            }

            div {
                class: "card",
                if let Some(text) = error() {
                    Alert { variant: AlertVariant::Error, "{text}" }
                }
                if success() {
                    Alert {
                        variant: AlertVariant::Success,
                        "Message sent. Thanks for reaching out!"
                    }
                }

                form {
                    onsubmit: on_submit,

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Name *" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                value: name(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "Email *" }
                            input {
                                r#type: "email",
                                class: "form-input",
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Subject *" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                value: subject(),
                                oninput: move |evt| subject.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "Category" }
                            select {
                                class: "form-select",
                                value: category(),
                                onchange: move |evt| category.set(evt.value()),
                                for (value, label) in CATEGORIES {
                                    option { value, "{label}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { class: "form-label", "Message *" }
                        textarea {
                            class: "form-textarea",
                            placeholder: "How can we help?",
                            value: message(),
                            oninput: move |evt| message.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-full",
                        disabled: submitting(),
                        if submitting() { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape_check() {
        assert!(looks_like_email("asha@college.edu"));
        assert!(!looks_like_email("asha"));
        assert!(!looks_like_email("asha@college"));
        assert!(!looks_like_email("@college.edu"));
        assert!(!looks_like_email("a@b@c.edu"));
    }
}
