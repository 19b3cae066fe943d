//! Admin dashboard: analytics overview, user management, approvals.

use dioxus::prelude::*;
use futures::try_join;

use api::models::pending_count;
use api::{DashboardStats, ManagedUser};
use session::UserProfile;
use ui::{alert, confirm, use_api, PendingApprovals, StatsGrid, TabBar, TabItem, UserTable};

use super::LoadingScreen;

#[component]
pub fn AdminDashboard(user: UserProfile) -> Element {
    let api = use_api();

    let mut users = use_signal(Vec::<ManagedUser>::new);
    let mut stats = use_signal(|| Option::<DashboardStats>::None);
    let mut loading = use_signal(|| true);
    let mut reload = use_signal(|| 0u32);
    let mut tab = use_signal(|| "dashboard");

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let _ = reload();
            async move {
                loading.set(true);
                match try_join!(api.users(), api.dashboard_stats()) {
                    Ok((user_list, dashboard_stats)) => {
                        users.set(user_list);
                        stats.set(Some(dashboard_stats));
                    }
                    Err(err) => tracing::error!("admin dashboard load failed: {err}"),
                }
                loading.set(false);
            }
        }
    });

    let handle_approve = use_callback({
        let api = api.clone();
        move |user_id: String| {
            let api = api.clone();
            spawn(async move {
                match api.approve_user(&user_id).await {
                    Ok(_) => {
                        alert("User approved successfully!");
                        reload += 1;
                    }
                    Err(err) => alert(&format!("Error approving user: {err}")),
                }
            });
        }
    });

    let handle_deactivate = use_callback({
        let api = api.clone();
        move |user_id: String| {
            if !confirm("Are you sure you want to deactivate this user?") {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.deactivate_user(&user_id).await {
                    Ok(_) => {
                        alert("User deactivated successfully!");
                        reload += 1;
                    }
                    Err(err) => alert(&format!("Error deactivating user: {err}")),
                }
            });
        }
    });

    let pending = pending_count(&users());
    let tabs = vec![
        TabItem::new("dashboard", "📊", "Dashboard"),
        TabItem::new("users", "👥", "User Management"),
        TabItem::new("approvals", "✅", format!("Approvals ({pending})")),
    ];

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-heading",
                h2 { "Admin Dashboard - Supreme Fitness" }
                span { class: "fine", "Signed in as {user.full_name}" }
            }

            TabBar { tabs, active: tab(), on_select: move |id| tab.set(id) }

            if loading() {
                LoadingScreen {}
            } else if tab() == "dashboard" {
                if let Some(dashboard_stats) = stats() {
                    StatsGrid { stats: dashboard_stats }
                }
            } else if tab() == "users" {
                UserTable {
                    users: users(),
                    on_approve: handle_approve,
                    on_deactivate: handle_deactivate,
                }
            } else {
                PendingApprovals {
                    users: users(),
                    on_approve: handle_approve,
                    on_reject: handle_deactivate,
                }
            }
        }
    }
}
