use api::ManagedUser;
use dioxus::prelude::*;

/// Full user table for the admin's management tab.
#[component]
pub fn UserTable(
    users: Vec<ManagedUser>,
    on_approve: EventHandler<String>,
    on_deactivate: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "card table-card",
            h3 { "All Users" }
            table {
                thead {
                    tr {
                        th { "User" }
                        th { "Role" }
                        th { "Status" }
                        th { "Joined" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in users.iter() {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_approve,
                            on_deactivate,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: ManagedUser,
    on_approve: EventHandler<String>,
    on_deactivate: EventHandler<String>,
) -> Element {
    let joined = user.date_joined.format("%b %e, %Y").to_string();
    let role = user.role.as_str();

    rsx! {
        tr {
            td {
                div {
                    p { class: "strong", "{user.full_name}" }
                    p { class: "fine", "{user.email}" }
                }
            }
            td {
                span { class: "badge badge-{role}", "{role}" }
            }
            td {
                div {
                    class: "badge-row",
                    span {
                        class: if user.is_active { "badge badge-active" } else { "badge badge-inactive" },
                        if user.is_active { "Active" } else { "Inactive" }
                    }
                    span {
                        class: if user.is_approved { "badge badge-approved" } else { "badge badge-pending" },
                        if user.is_approved { "Approved" } else { "Pending" }
                    }
                }
            }
            td { "{joined}" }
            td {
                if !user.is_approved {
                    button {
                        class: "link-button",
                        onclick: {
                            let user_id = user.id.clone();
                            move |_| on_approve.call(user_id.clone())
                        },
                        "Approve"
                    }
                }
                if user.can_deactivate() {
                    button {
                        class: "link-button danger",
                        onclick: {
                            let user_id = user.id.clone();
                            move |_| on_deactivate.call(user_id.clone())
                        },
                        "Deactivate"
                    }
                }
            }
        }
    }
}

/// Card list of accounts waiting for approval.
#[component]
pub fn PendingApprovals(
    users: Vec<ManagedUser>,
    on_approve: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    let pending: Vec<ManagedUser> = users.iter().filter(|user| !user.is_approved).cloned().collect();

    rsx! {
        div {
            class: "stack",
            h3 { "Pending Approvals" }
            for user in pending.iter() {
                ApprovalCard {
                    key: "{user.id}",
                    user: user.clone(),
                    on_approve,
                    on_reject,
                }
            }
            if pending.is_empty() {
                div { class: "empty", "No pending approvals" }
            }
        }
    }
}

#[component]
fn ApprovalCard(
    user: ManagedUser,
    on_approve: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    let role = user.role.as_str();
    let phone = user
        .phone
        .clone()
        .unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        div {
            class: "card",
            div {
                class: "card-row",
                div {
                    h4 { "{user.full_name}" }
                    p { class: "muted", "{user.email}" }
                    p { class: "fine", "Phone: {phone}" }
                    span { class: "badge badge-{role}", "{role}" }
                }
                div {
                    class: "card-actions",
                    button {
                        class: "primary",
                        onclick: {
                            let user_id = user.id.clone();
                            move |_| on_approve.call(user_id.clone())
                        },
                        "Approve"
                    }
                    button {
                        class: "danger",
                        onclick: {
                            let user_id = user.id.clone();
                            move |_| on_reject.call(user_id.clone())
                        },
                        "Reject"
                    }
                }
            }
        }
    }
}
