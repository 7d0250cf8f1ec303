//! Edit-user dialog: full profile fields plus role, account status,
//! password reset, and the activate/suspend toggle.

use api::{AccountStatus, AdminUserUpdate, Branch, Role};
use dioxus::prelude::*;
use session::Identity;
use ui::{use_api, Alert, AlertVariant, Spinner};

#[component]
pub(crate) fn EditUserDialog(
    user_id: String,
    on_close: EventHandler<()>,
    on_updated: EventHandler<Identity>,
) -> Element {
    let client = use_api();

    let mut original = use_signal(|| Option::<Identity>::None);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut branch = use_signal(|| Option::<Branch>::None);
    let mut semester = use_signal(|| Option::<u8>::None);
    let mut phone = use_signal(String::new);
    let mut enrollment_id = use_signal(String::new);
    let mut graduation_year = use_signal(String::new);
    let mut college = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut account_status = use_signal(|| AccountStatus::Active);
    let mut new_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let load_client = client.clone();
    let load_id = user_id.clone();
    let _loader = use_resource(move || {
        let client = load_client.clone();
        let user_id = load_id.clone();
        async move {
            match client.user(&user_id).await {
                Ok(user) => {
                    name.set(user.name.clone());
                    email.set(user.email.clone());
                    branch.set(user.branch);
                    semester.set(user.semester);
                    phone.set(user.phone.clone().unwrap_or_default());
                    enrollment_id.set(user.enrollment_id.clone().unwrap_or_default());
                    graduation_year.set(
                        user.graduation_year
                            .map(|y| y.to_string())
                            .unwrap_or_default(),
                    );
                    college.set(user.college.clone().unwrap_or_default());
                    bio.set(user.bio.clone().unwrap_or_default());
                    role.set(user.role);
                    account_status.set(user.account_status);
                    original.set(Some(user));
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
        }
    });

    let save_client = client.clone();
    let save_id = user_id.clone();
    let on_save = move |_| {
        let client = save_client.clone();
        let user_id = save_id.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            if n.is_empty() || e.is_empty() {
                error.set(Some("Name and email are required".to_string()));
                return;
            }

            saving.set(true);
            let update = AdminUserUpdate {
                name: n,
                email: e,
                branch: branch(),
                semester: semester(),
                phone: non_empty(phone()),
                enrollment_id: non_empty(enrollment_id()),
                graduation_year: graduation_year().trim().parse().ok(),
                college: non_empty(college()),
                bio: non_empty(bio()),
                role: role(),
                account_status: account_status(),
            };
            match client.update_user(&user_id, &update).await {
                Ok(updated) => {
                    original.set(Some(updated.clone()));
                    on_updated.call(updated);
                    success.set(Some("User updated successfully!".to_string()));
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
            saving.set(false);
        });
    };

    let reset_client = client.clone();
    let reset_id = user_id.clone();
    let on_reset_password = move |_| {
        let client = reset_client.clone();
        let user_id = reset_id.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let password = new_password();
            if password.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            match client.reset_user_password(&user_id, password).await {
                Ok(()) => {
                    new_password.set(String::new());
                    success.set(Some("Password reset successfully!".to_string()));
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let toggle_client = client;
    let toggle_id = user_id.clone();
    let on_toggle_status = move |_| {
        let client = toggle_client.clone();
        let user_id = toggle_id.clone();
        spawn(async move {
            error.set(None);
            match client.toggle_user_status(&user_id).await {
                Ok(status) => {
                    account_status.set(status);
                    if let Some(mut user) = original() {
                        user.account_status = status;
                        original.set(Some(user.clone()));
                        on_updated.call(user);
                    }
                }
                Err(err) => {
                    if !err.is_unauthorized() {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div {
                    class: "flex-between",
                    h2 { "Edit User" }
                    button {
                        class: "btn btn-sm btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }

                if let Some(text) = error() {
                    Alert {
                        variant: AlertVariant::Error,
                        on_dismiss: move |_| error.set(None),
                        "{text}"
                    }
                }
                if let Some(text) = success() {
                    Alert {
                        variant: AlertVariant::Success,
                        on_dismiss: move |_| success.set(None),
                        "{text}"
                    }
                }

                if original().is_none() {
                    Spinner {}
                } else {
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Name" }
                            input {
                                r#type: "text",
                                class: "form-input",
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
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Branch" }
                            select {
                                class: "form-select",
                                value: branch().map(|b| b.as_str()).unwrap_or(""),
                                onchange: move |evt| branch.set(Branch::from_code(&evt.value())),
                                option { value: "", "Not set" }
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
                                value: semester().map(|s| s.to_string()).unwrap_or_default(),
                                onchange: move |evt| semester.set(evt.value().parse().ok()),
                                option { value: "", "Not set" }
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
                            label { class: "form-label", "Phone" }
                            input {
                                r#type: "tel",
                                class: "form-input",
                                value: phone(),
                                oninput: move |evt| phone.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "Enrollment ID" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                value: enrollment_id(),
                                oninput: move |evt| enrollment_id.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Graduation Year" }
                            select {
                                class: "form-select",
                                value: graduation_year(),
                                onchange: move |evt| graduation_year.set(evt.value()),
                                option { value: "", "Not set" }
                                for year in 2024u16..=2030 {
                                    option { value: "{year}", "{year}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "College" }
                            input {
                                r#type: "text",
                                class: "form-input",
                                value: college(),
                                oninput: move |evt| college.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { class: "form-label", "Bio" }
                        textarea {
                            class: "form-textarea",
                            value: bio(),
                            oninput: move |evt| bio.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { class: "form-label", "Role" }
                            select {
                                class: "form-select",
                                value: role().as_str(),
                                onchange: move |evt| {
                                    role.set(if evt.value() == "admin" { Role::Admin } else { Role::Student });
                                },
                                option { value: "student", "Student" }
                                option { value: "admin", "Admin" }
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", "Account Status" }
                            select {
                                class: "form-select",
                                value: account_status().as_str(),
                                onchange: move |evt| {
                                    let choice = AccountStatus::ALL
                                        .into_iter()
                                        .find(|s| s.as_str() == evt.value());
                                    if let Some(status) = choice {
                                        account_status.set(status);
                                    }
                                },
                                for status in AccountStatus::ALL {
                                    option { value: status.as_str(), "{status.as_str()}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "card-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: on_save,
                            if saving() { "Saving..." } else { "Save Changes" }
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: on_toggle_status,
                            if account_status() == AccountStatus::Active { "Suspend User" } else { "Activate User" }
                        }
                    }

                    div {
                        class: "reset-password-row",
                        input {
                            r#type: "password",
                            class: "form-input",
                            placeholder: "New password (min 6 characters)",
                            value: new_password(),
                            oninput: move |evt| new_password.set(evt.value()),
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: on_reset_password,
                            "Reset Password"
                        }
                    }
                }
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}
