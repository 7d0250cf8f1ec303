//! Signup page: account details plus the academic attributes the browse
//! filters run on.

use api::{Branch, SignupRequest};
use dioxus::prelude::*;
use ui::{complete_login, use_api, use_session, use_session_service, Alert, AlertVariant};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let state = use_session();
    let service = use_session_service();
    let client = use_api();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut branch = use_signal(|| Branch::Cse);
    let mut semester = use_signal(|| 1u8);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if state().is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let service = service.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }

            loading.set(true);
            let request = SignupRequest {
                name: n,
                email: e,
                password: p,
                branch: branch(),
                semester: semester(),
            };
            match client.signup(&request).await {
                Ok(auth) => {
                    complete_login(state, &service, auth);
                    nav.push(Route::Home {});
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
            class: "container container-sm page-top",

            div {
                class: "page-hero",
                h1 { "Join CampusShare" }
                p { "Create your account and start sharing" }
            }

            div {
                class: "card",
                if let Some(message) = error() {
                    Alert { variant: AlertVariant::Error, "{message}" }
                }

                form {
                    onsubmit: on_submit,

                    div {
                        class: "form-group",
                        label { class: "form-label", "Full Name" }
                        input {
                            r#type: "text",
                            class: "form-input",
                            placeholder: "Your name",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { class: "form-label", "Email" }
                        input {
                            r#type: "email",
                            class: "form-input",
                            placeholder: "your.email@college.edu",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { class: "form-label", "Password" }
                        input {
                            r#type: "password",
                            class: "form-input",
                            placeholder: "At least 6 characters",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Branch" }
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
                            label { class: "form-label", "Semester" }
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

                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-full",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "form-footnote",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login here" }
                }
            }
        }
    }
}
