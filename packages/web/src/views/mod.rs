use dioxus::prelude::*;
use session::UserProfile;
use ui::{dashboard_kind, DashboardKind, LogoutButton};

mod admin;
mod login;
mod member;
mod register;
mod trainer;

pub use admin::AdminDashboard;
pub use member::MemberDashboard;
pub use trainer::TrainerDashboard;

/// Spinner shown while the stored session is read and while dashboards load.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            div { class: "spinner" }
            p { class: "muted", "Loading..." }
        }
    }
}

/// Login/Register toggle. Which form shows is view-local state, never
/// persisted.
#[component]
pub fn AnonymousScreen() -> Element {
    let mut show_login = use_signal(|| true);

    rsx! {
        div {
            class: "auth-screen",
            if show_login() {
                login::LoginView { on_switch: move |_| show_login.set(false) }
            } else {
                register::RegisterView { on_switch: move |_| show_login.set(true) }
            }
        }
    }
}

/// Renders exactly one dashboard for the signed-in user's role.
#[component]
pub fn RoleRouter(user: UserProfile) -> Element {
    match dashboard_kind(user.role) {
        DashboardKind::Member => rsx! { MemberDashboard { user } },
        DashboardKind::Trainer => rsx! { TrainerDashboard { user } },
        DashboardKind::Admin => rsx! { AdminDashboard { user } },
        DashboardKind::Unsupported => rsx! { UnsupportedRole { user } },
    }
}

/// Explicit dead-end for role strings this client has no dashboard for.
#[component]
fn UnsupportedRole(user: UserProfile) -> Element {
    let role = user.role.as_str();

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card",
                h2 { "Unsupported account role" }
                p {
                    class: "muted",
                    "The role '{role}' has no dashboard in this version of the app. Sign out and contact the studio."
                }
                LogoutButton {}
            }
        }
    }
}
