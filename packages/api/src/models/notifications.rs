use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A notification addressed to the signed-in user. Mutated only via the
/// mark-as-read action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Unread count shown in the member dashboard's tab label.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Booking Confirmed".to_string(),
            message: "See you there".to_string(),
            is_read,
            created_at: "2025-05-20T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn unread_count_drops_a_notification_once_read() {
        let mut list = vec![notification("n1", false), notification("n2", false)];
        assert_eq!(unread_count(&list), 2);

        // What the next reload returns after marking n1 read.
        list[0].is_read = true;
        assert_eq!(unread_count(&list), 1);
    }
}
