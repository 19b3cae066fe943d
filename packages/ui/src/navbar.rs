use dioxus::prelude::*;
use session::UserProfile;

use crate::LogoutButton;

/// Top application bar: brand, signed-in identity, logout.
#[component]
pub fn AppHeader(user: UserProfile) -> Element {
    let role = user.role.as_str();

    rsx! {
        header {
            class: "app-header",
            h1 { class: "brand", "Supreme Fitness" }
            div {
                class: "app-header-user",
                span { class: "fine", "Welcome, {user.full_name} ({role})" }
                LogoutButton {}
            }
        }
    }
}
