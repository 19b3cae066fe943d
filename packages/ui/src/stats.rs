use api::DashboardStats;
use dioxus::prelude::*;

/// Summary cards for the admin overview tab.
#[component]
pub fn StatsGrid(stats: DashboardStats) -> Element {
    let revenue = format!("${}", stats.total_revenue);

    rsx! {
        div {
            class: "stats-grid",
            StatCard { icon: "👥", label: "Total Members", value: stats.total_members.to_string() }
            StatCard { icon: "🏋️", label: "Total Trainers", value: stats.total_trainers.to_string() }
            StatCard { icon: "📅", label: "Active Classes", value: stats.total_classes.to_string() }
            StatCard { icon: "🎫", label: "Total Bookings", value: stats.total_bookings.to_string() }
            StatCard { icon: "💰", label: "Total Revenue", value: revenue }
            StatCard { icon: "⏳", label: "Pending Approvals", value: stats.pending_approvals.to_string() }
        }
    }
}

#[component]
fn StatCard(icon: String, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            span { class: "stat-icon", "{icon}" }
            div {
                p { class: "fine", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}
