//! Upload page: resource metadata plus the PDF itself.
//!
//! File checks run entirely client-side before any request is issued: a
//! non-PDF name or an oversized file blocks submission with an inline
//! error.

use api::{Branch, ResourceType, UploadRequest};
use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, Guard, Requirement};

use crate::Route;

const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

fn validate_file(name: &str, size: u64) -> Result<(), String> {
    if !name.to_ascii_lowercase().ends_with(".pdf") {
        return Err("Only PDF files are allowed".to_string());
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("File size must be less than 10MB".to_string());
    }
    Ok(())
}

#[component]
pub fn Upload() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Authenticated,
            UploadForm {}
        }
    }
}

#[component]
fn UploadForm() -> Element {
    let client = use_api();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut branch = use_signal(|| Branch::Cse);
    let mut semester = use_signal(|| 1u8);
    let mut subject = use_signal(String::new);
    let mut kind = use_signal(|| ResourceType::Notes);
    let mut file = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let on_file_change = move |evt: FormEvent| {
        error.set(None);
        file.set(None);
        let Some(engine) = evt.files() else {
            return;
        };
        spawn(async move {
            let Some(name) = engine.files().first().cloned() else {
                return;
            };
            let size = engine.file_size(&name).await.unwrap_or(0);
            match validate_file(&name, size) {
                Ok(()) => {
                    if let Some(bytes) = engine.read_file(&name).await {
                        file.set(Some((name, bytes)));
                    } else {
                        error.set(Some("Could not read the selected file".to_string()));
                    }
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let t = title().trim().to_string();
            let d = description().trim().to_string();
            let s = subject().trim().to_string();
            if t.is_empty() || d.is_empty() || s.is_empty() {
                error.set(Some("Title, description and subject are required".to_string()));
                return;
            }
            let Some((file_name, bytes)) = file() else {
                error.set(Some("Please select a PDF file".to_string()));
                return;
            };

            loading.set(true);
            let request = UploadRequest {
                title: t,
                description: d,
                branch: branch(),
                semester: semester(),
                subject: s,
                kind: kind(),
                file_name,
                bytes,
            };
            match client.upload_resource(request).await {
                Ok(()) => {
                    success.set(Some(
                        "Resource uploaded successfully! Awaiting admin approval.".to_string(),
                    ));
                    title.set(String::new());
                    description.set(String::new());
                    subject.set(String::new());
                    file.set(None);
                    loading.set(false);

                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    nav.push(Route::Profile {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "container container-md page-top",

            div {
                class: "page-hero",
                h1 { "Upload Resource" }
                p { "Share your notes and help your peers" }
            }

            div {
                class: "card",
                if let Some(message) = error() {
                    Alert { variant: AlertVariant::Error, "{message}" }
                }
                if let Some(message) = success() {
                    Alert { variant: AlertVariant::Success, "{message}" }
                }

                form {
                    onsubmit: on_submit,

                    div {
                        class: "form-group",
                        label { class: "form-label", "Title *" }
                        input {
                            r#type: "text",
                            class: "form-input",
                            placeholder: "e.g., Data Structures Complete Notes",
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { class: "form-label", "Description *" }
                        textarea {
                            class: "form-textarea",
                            placeholder: "Describe the content, topics covered, etc.",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Branch *" }
                            select {
                                class: "form-select",
                                value: branch().as_str(),
                                onchange: move |evt| {
                                    if let Some(b) = Branch::from_code(&evt.value()) {
                                        branch.set(b);
                                    }
                                },
                                for b in Branch::ALL {
                                    option { value: b.as_str(), "{b}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "Semester *" }
                            select {
                                class: "form-select",
                                value: "{semester()}",
                                onchange: move |evt| {
                                    if let Ok(sem) = evt.value().parse() {
                                        semester.set(sem);
                                    }
                                },
                                for sem in 1u8..=8 {
                                    option { value: "{sem}", "Semester {sem}" }
                                }
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
                                placeholder: "e.g., Data Structures",
                                value: subject(),
                                oninput: move |evt| subject.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "Type *" }
                            select {
                                class: "form-select",
                                value: kind().as_str(),
                                onchange: move |evt| {
                                    if let Some(t) = ResourceType::from_code(&evt.value()) {
                                        kind.set(t);
                                    }
                                },
                                for t in ResourceType::ALL {
                                    option { value: t.as_str(), "{t}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { class: "form-label", "Upload PDF File *" }
                        input {
                            r#type: "file",
                            accept: ".pdf",
                            class: "form-input",
                            onchange: on_file_change,
                        }
                        if let Some(text) = file().map(|(name, bytes)| {
                            format!("Selected: {name} ({:.2} MB)", bytes.len() as f64 / 1024.0 / 1024.0)
                        }) {
                            p { class: "file-selected", "{text}" }
                        }
                        p {
                            class: "form-hint",
                            "Maximum file size: 10MB. Only PDF files are allowed."
                        }
                    }

                    Alert {
                        variant: AlertVariant::Info,
                        strong { "Note: " }
                        "Your upload will be reviewed by an admin before it becomes visible to other students."
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-full",
                        disabled: loading(),
                        if loading() { "Uploading..." } else { "Upload Resource" }
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
    fn test_pdf_within_ceiling_is_accepted() {
        assert!(validate_file("ds-notes.pdf", 1024).is_ok());
        // Extension check is case-insensitive.
        assert!(validate_file("DS-NOTES.PDF", 1024).is_ok());
        // Exactly at the ceiling is still allowed.
        assert!(validate_file("big.pdf", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_non_pdf_is_blocked() {
        let err = validate_file("notes.docx", 1024).unwrap_err();
        assert_eq!(err, "Only PDF files are allowed");
        assert!(validate_file("archive.pdf.zip", 10).is_err());
    }

    #[test]
    fn test_oversized_file_is_blocked() {
        let err = validate_file("huge.pdf", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err, "File size must be less than 10MB");
    }
}
