//! Login page with email/password form.

use dioxus::prelude::*;
use ui::{complete_login, use_api, use_session, use_session_service, Alert, AlertVariant};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let state = use_session();
    let service = use_session_service();
    let client = use_api();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: nothing to do here.
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

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match client.login(e, p).await {
                Ok(auth) => {
                    let identity = complete_login(state, &service, auth);
                    if identity.role.is_admin() {
                        nav.push(Route::AdminDashboard {});
                    } else {
                        nav.push(Route::Home {});
                    }
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
                h1 { "Welcome Back" }
                p { "Login to access your resources" }
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
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-full",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "form-footnote",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up here" }
                }
            }
        }
    }
}
