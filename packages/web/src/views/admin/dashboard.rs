//! Admin dashboard: platform counters and quick links to the queues.

use dioxus::prelude::*;
use ui::{use_api, Alert, AlertVariant, Guard, Requirement, Spinner};

use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Admin,
            DashboardView {}
        }
    }
}

#[component]
fn DashboardView() -> Element {
    let client = use_api();
    let stats = use_resource(move || {
        let client = client.clone();
        async move { client.admin_stats().await }
    });

    rsx! {
        div {
            class: "container page-top",
            h1 { class: "page-title", "Admin Dashboard" }

            match &*stats.read() {
                Some(Ok(stats)) => rsx! {
                        div {
                            class: "stats-grid",
                            div { class: "stat-card",
                                div { class: "stat-value", "{stats.total_users}" }
                                div { class: "stat-label", "Total Users" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-value", "{stats.total_uploads}" }
                                div { class: "stat-label", "Total Uploads" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-value", "{stats.pending_approvals}" }
                                div { class: "stat-label", "Pending Approvals" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-value", "{stats.approved_resources}" }
                                div { class: "stat-label", "Approved Resources" }
                            }
                            div { class: "stat-card",
                                div { class: "stat-value", "{stats.rejected_resources}" }
                                div { class: "stat-label", "Rejected Resources" }
                            }
                        }

                        h2 { class: "section-heading", "Quick Actions" }
                        div {
                            class: "grid grid-2",
                            Link { to: Route::PendingResources {}, class: "card card-link",
                                div { class: "flex-between",
                                    div {
                                        h3 { class: "card-title", "Pending Resources" }
                                        p { class: "card-description", "Review and approve uploads" }
                                    }
                                    span { class: "badge badge-warning badge-count", "{stats.pending_approvals}" }
                                }
                            }
                            Link { to: Route::ApprovedResources {}, class: "card card-link",
                                div { class: "flex-between",
                                    div {
                                        h3 { class: "card-title", "Approved Resources" }
                                        p { class: "card-description", "Manage approved content" }
                                    }
                                    span { class: "badge badge-success badge-count", "{stats.approved_resources}" }
                                }
                            }
                            Link { to: Route::RejectedResources {}, class: "card card-link",
                                div { class: "flex-between",
                                    div {
                                        h3 { class: "card-title", "Rejected Resources" }
                                        p { class: "card-description", "View rejected uploads" }
                                    }
                                    span { class: "badge badge-error badge-count", "{stats.rejected_resources}" }
                                }
                            }
                            Link { to: Route::UserManagement {}, class: "card card-link",
                                div { class: "flex-between",
                                    div {
                                        h3 { class: "card-title", "User Management" }
                                        p { class: "card-description", "Manage platform users" }
                                    }
                                    span { class: "badge badge-primary badge-count", "{stats.total_users}" }
                                }
                            }
                            Link { to: Route::ContactMessages {}, class: "card card-link",
                                div { class: "flex-between",
                                    div {
                                        h3 { class: "card-title", "Contact Messages" }
                                        p { class: "card-description", "Read and triage the inbox" }
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
