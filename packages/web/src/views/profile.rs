//! Profile page: identity display with a full-field edit mode, plus the
//! user's own uploads and their moderation state.

use api::{Branch, ModerationStatus, ProfileUpdate, ProfileVisibility, SocialLinks};
use dioxus::prelude::*;
use ui::{
    apply_identity, use_api, use_session, use_session_service, Alert, AlertVariant, EmptyState,
    Guard, Requirement, Spinner,
};

fn status_badge_class(status: ModerationStatus) -> &'static str {
    match status {
        ModerationStatus::Pending => "badge badge-warning",
        ModerationStatus::Approved => "badge badge-success",
        ModerationStatus::Rejected => "badge badge-error",
    }
}

fn shown(value: &Option<String>) -> String {
    value
        .clone()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "Not provided".to_string())
}

fn opt(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Authenticated,
            ProfileView {}
        }
    }
}

#[component]
fn ProfileView() -> Element {
    let state = use_session();
    let service = use_session_service();
    let client = use_api();

    let uploads_client = client.clone();
    let uploads = use_resource(move || {
        let client = uploads_client.clone();
        async move { client.my_uploads().await }
    });

    let mut editing = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut enrollment_id = use_signal(String::new);
    let mut graduation_year = use_signal(String::new);
    let mut college = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut branch = use_signal(|| Option::<Branch>::None);
    let mut semester = use_signal(|| Option::<u8>::None);
    let mut linkedin = use_signal(String::new);
    let mut github = use_signal(String::new);
    let mut twitter = use_signal(String::new);
    let mut visibility = use_signal(|| ProfileVisibility::Public);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let Some(identity) = state().identity().cloned() else {
        return rsx! {};
    };

    let member_since = shown(&identity.created_at);
    let phone_text = shown(&identity.phone);
    let enrollment_text = shown(&identity.enrollment_id);
    let college_text = shown(&identity.college);
    let bio_text = shown(&identity.bio);
    let linkedin_text = shown(&identity.social_links.linkedin);
    let github_text = shown(&identity.social_links.github);
    let twitter_text = shown(&identity.social_links.twitter);

    let seed = identity.clone();
    let begin_edit = move |_| {
        name.set(seed.name.clone());
        phone.set(seed.phone.clone().unwrap_or_default());
        enrollment_id.set(seed.enrollment_id.clone().unwrap_or_default());
        graduation_year.set(
            seed.graduation_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        );
        college.set(seed.college.clone().unwrap_or_default());
        bio.set(seed.bio.clone().unwrap_or_default());
        branch.set(seed.branch);
        semester.set(seed.semester);
        linkedin.set(seed.social_links.linkedin.clone().unwrap_or_default());
        github.set(seed.social_links.github.clone().unwrap_or_default());
        twitter.set(seed.social_links.twitter.clone().unwrap_or_default());
        visibility.set(seed.profile_visibility);
        error.set(None);
        success.set(None);
        editing.set(true);
    };

    let cancel_edit = move |_| {
        editing.set(false);
        error.set(None);
    };

    let save_client = client;
    let save_service = service;
    let on_save = move |_| {
        let client = save_client.clone();
        let service = save_service.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let n = name().trim().to_string();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            let Some(b) = branch() else {
                error.set(Some("Branch is required".to_string()));
                return;
            };
            let Some(sem) = semester() else {
                error.set(Some("Semester is required".to_string()));
                return;
            };

            saving.set(true);
            let update = ProfileUpdate {
                name: n,
                branch: b,
                semester: sem,
                phone: opt(phone()),
                enrollment_id: opt(enrollment_id()),
                graduation_year: graduation_year().trim().parse().ok(),
                college: opt(college()),
                bio: opt(bio()),
                social_links: SocialLinks {
                    linkedin: opt(linkedin()),
                    github: opt(github()),
                    twitter: opt(twitter()),
                },
                profile_visibility: visibility(),
            };
            match client.update_profile(&update).await {
                Ok(updated) => {
                    apply_identity(state, &service, updated);
                    editing.set(false);
                    success.set(Some("Profile updated successfully!".to_string()));
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

    rsx! {
        div {
            class: "container container-md page-top",

            div {
                class: "flex-between",
                div {
                    class: "page-hero page-hero-left",
                    h1 { "My Profile" }
                    p { "Member since {member_since}" }
                }
                if !editing() {
                    button { class: "btn btn-outline", onclick: begin_edit, "Edit Profile" }
                } else {
                    div {
                        class: "card-actions",
                        button {
                            class: "btn btn-primary",
                            disabled: saving(),
                            onclick: on_save,
                            if saving() { "Saving..." } else { "Save" }
                        }
                        button {
                            class: "btn btn-outline",
                            disabled: saving(),
                            onclick: cancel_edit,
                            "Cancel"
                        }
                    }
                }
            }

            div {
                class: "card",
                if let Some(text) = success() {
                    Alert {
                        variant: AlertVariant::Success,
                        on_dismiss: move |_| success.set(None),
                        "{text}"
                    }
                }
                if let Some(text) = error() {
                    Alert {
                        variant: AlertVariant::Error,
                        on_dismiss: move |_| error.set(None),
                        "{text}"
                    }
                }

                if !editing() {
                    div {
                        class: "profile-grid",
                        section {
                            h3 { "Basic Information" }
                            dl {
                                class: "field-grid",
                                div { dt { "Full Name" } dd { "{identity.name}" } }
                                div { dt { "Email" } dd { "{identity.email}" } }
                                div { dt { "Phone" } dd { "{phone_text}" } }
                                div { dt { "Enrollment ID" } dd { "{enrollment_text}" } }
                            }
                        }
                        section {
                            h3 { "Academic Information" }
                            dl {
                                class: "field-grid",
                                div {
                                    dt { "Branch" }
                                    dd {
                                        if let Some(b) = identity.branch { "{b}" } else { "Not provided" }
                                    }
                                }
                                div {
                                    dt { "Semester" }
                                    dd {
                                        if let Some(sem) = identity.semester { "Semester {sem}" } else { "Not provided" }
                                    }
                                }
                                div {
                                    dt { "Graduation Year" }
                                    dd {
                                        if let Some(year) = identity.graduation_year { "{year}" } else { "Not provided" }
                                    }
                                }
                                div { dt { "College" } dd { "{college_text}" } }
                            }
                        }
                        section {
                            h3 { "About Me" }
                            p { class: "profile-bio", "{bio_text}" }
                        }
                        section {
                            h3 { "Social Links" }
                            dl {
                                class: "field-grid",
                                div { dt { "LinkedIn" } dd { "{linkedin_text}" } }
                                div { dt { "GitHub" } dd { "{github_text}" } }
                                div { dt { "Twitter" } dd { "{twitter_text}" } }
                            }
                        }
                        section {
                            h3 { "Account" }
                            dl {
                                class: "field-grid",
                                div {
                                    dt { "Profile Visibility" }
                                    dd {
                                        span { class: "badge badge-muted", "{identity.profile_visibility.as_str()}" }
                                    }
                                }
                                div {
                                    dt { "Account Status" }
                                    dd {
                                        span { class: "badge badge-success", "{identity.account_status.as_str()}" }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: "profile-grid",
                        section {
                            h3 { "Basic Information" }
                            div {
                                class: "form-row",
                                div {
                                    class: "form-group",
                                    label { class: "form-label", "Full Name *" }
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
                                        value: "{identity.email}",
                                        disabled: true,
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
                                        placeholder: "e.g., +91 98765 43210",
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
                                        placeholder: "e.g., 2021CSE001",
                                        value: enrollment_id(),
                                        oninput: move |evt| enrollment_id.set(evt.value()),
                                    }
                                }
                            }
                        }
                        section {
                            h3 { "Academic Information" }
                            div {
                                class: "form-row",
                                div {
                                    class: "form-group",
                                    label { class: "form-label", "Branch *" }
                                    select {
                                        class: "form-select",
                                        value: branch().map(|b| b.as_str()).unwrap_or(""),
                                        onchange: move |evt| branch.set(Branch::from_code(&evt.value())),
                                        option { value: "", "Select Branch" }
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
                                        value: semester().map(|s| s.to_string()).unwrap_or_default(),
                                        onchange: move |evt| semester.set(evt.value().parse().ok()),
                                        option { value: "", "Select Semester" }
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
                                    label { class: "form-label", "Graduation Year" }
                                    select {
                                        class: "form-select",
                                        value: graduation_year(),
                                        onchange: move |evt| graduation_year.set(evt.value()),
                                        option { value: "", "Select Year" }
                                        for year in 2024u16..=2030 {
                                            option { value: "{year}", "{year}" }
                                        }
                                    }
                                }
                                div {
                                    class: "form-group",
                                    label { class: "form-label", "College/University" }
                                    input {
                                        r#type: "text",
                                        class: "form-input",
                                        value: college(),
                                        oninput: move |evt| college.set(evt.value()),
                                    }
                                }
                            }
                        }
                        section {
                            h3 { "About Me" }
                            div {
                                class: "form-group",
                                textarea {
                                    class: "form-textarea",
                                    maxlength: 500,
                                    placeholder: "Tell us about yourself (max 500 characters)",
                                    value: bio(),
                                    oninput: move |evt| bio.set(evt.value()),
                                }
                                p { class: "form-hint", "{bio().len()}/500 characters" }
                            }
                        }
                        section {
                            h3 { "Social Links" }
                            div {
                                class: "form-group",
                                label { class: "form-label", "LinkedIn Profile URL" }
                                input {
                                    r#type: "url",
                                    class: "form-input",
                                    placeholder: "https://linkedin.com/in/username",
                                    value: linkedin(),
                                    oninput: move |evt| linkedin.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-group",
                                label { class: "form-label", "GitHub Profile URL" }
                                input {
                                    r#type: "url",
                                    class: "form-input",
                                    placeholder: "https://github.com/username",
                                    value: github(),
                                    oninput: move |evt| github.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-group",
                                label { class: "form-label", "Twitter Profile URL" }
                                input {
                                    r#type: "url",
                                    class: "form-input",
                                    placeholder: "https://twitter.com/username",
                                    value: twitter(),
                                    oninput: move |evt| twitter.set(evt.value()),
                                }
                            }
                        }
                        section {
                            h3 { "Profile Visibility" }
                            div {
                                class: "form-group",
                                select {
                                    class: "form-select",
                                    value: visibility().as_str(),
                                    onchange: move |evt| {
                                        let choice = ProfileVisibility::ALL
                                            .into_iter()
                                            .find(|v| v.as_str() == evt.value());
                                        if let Some(v) = choice {
                                            visibility.set(v);
                                        }
                                    },
                                    for v in ProfileVisibility::ALL {
                                        option { value: v.as_str(), "{v.as_str()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "flex-between section-heading",
                h2 { "My Uploads" }
            }

            match &*uploads.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState {
                        icon: "📤",
                        title: "No uploads yet",
                        text: "Start sharing resources with your peers!",
                    }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "grid",
                        for resource in list.clone() {
                            div {
                                key: "{resource.id}",
                                class: "card",
                                div {
                                    class: "flex-between",
                                    div {
                                        h3 { class: "card-title", "{resource.title}" }
                                        p { class: "card-description", "{resource.description}" }
                                        div {
                                            class: "badge-row",
                                            span { class: "badge badge-muted", "{resource.kind}" }
                                            span { class: "badge badge-muted", "{resource.branch}" }
                                            span { class: "badge badge-muted", "Sem {resource.semester}" }
                                            span { class: "badge badge-muted", "{resource.subject}" }
                                        }
                                    }
                                    span {
                                        class: status_badge_class(resource.status),
                                        "{resource.status.as_str().to_uppercase()}"
                                    }
                                }
                                if resource.status == ModerationStatus::Rejected {
                                    if let Some(reason) = &resource.rejection_reason {
                                        Alert {
                                            variant: AlertVariant::Error,
                                            strong { "Rejection reason: " }
                                            "{reason}"
                                        }
                                    }
                                }
                            }
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
