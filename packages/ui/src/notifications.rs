use api::Notification;
use dioxus::prelude::*;

/// Notification list with the mark-as-read action on unread entries.
#[component]
pub fn NotificationList(
    notifications: Vec<Notification>,
    on_mark_read: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "stack",
            h3 { "Notifications" }
            for notification in notifications.iter() {
                NotificationCard {
                    key: "{notification.id}",
                    notification: notification.clone(),
                    on_mark_read,
                }
            }
            if notifications.is_empty() {
                div { class: "empty", "No notifications yet" }
            }
        }
    }
}

#[component]
fn NotificationCard(notification: Notification, on_mark_read: EventHandler<String>) -> Element {
    let received = notification.created_at.format("%b %e, %Y %H:%M").to_string();

    rsx! {
        div {
            class: if notification.is_read { "card notification" } else { "card notification unread" },
            div {
                class: "card-row",
                div {
                    h4 { "{notification.title}" }
                    p { class: "muted", "{notification.message}" }
                    p { class: "fine", "{received}" }
                }
                if !notification.is_read {
                    button {
                        class: "link-button",
                        onclick: {
                            let notification_id = notification.id.clone();
                            move |_| on_mark_read.call(notification_id.clone())
                        },
                        "Mark as read"
                    }
                }
            }
        }
    }
}
