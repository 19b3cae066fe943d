use chrono::{DateTime, Utc};
use serde::Deserialize;
use session::Role;

/// A user row as the admin dashboard sees it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManagedUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    pub date_joined: DateTime<Utc>,
    pub is_active: bool,
    pub is_approved: bool,
}

impl ManagedUser {
    /// Admin accounts are never offered the deactivate action.
    pub fn can_deactivate(&self) -> bool {
        self.is_active && self.role != Role::Admin
    }
}

/// Count of accounts awaiting approval, shown in the admin tab label.
pub fn pending_count(users: &[ManagedUser]) -> usize {
    users.iter().filter(|user| !user.is_approved).count()
}

/// Summary figures for the admin overview tab.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub total_members: u64,
    pub total_trainers: u64,
    pub total_classes: u64,
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub pending_approvals: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, is_active: bool, is_approved: bool) -> ManagedUser {
        ManagedUser {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            full_name: "A".to_string(),
            role,
            phone: None,
            date_joined: "2025-01-01T00:00:00Z".parse().unwrap(),
            is_active,
            is_approved,
        }
    }

    #[test]
    fn admins_and_inactive_users_are_not_deactivatable() {
        assert!(user(Role::Member, true, true).can_deactivate());
        assert!(!user(Role::Admin, true, true).can_deactivate());
        assert!(!user(Role::Trainer, false, true).can_deactivate());
    }

    #[test]
    fn pending_count_tracks_unapproved_users() {
        let users = vec![
            user(Role::Member, true, true),
            user(Role::Trainer, true, false),
            user(Role::Member, true, false),
        ];
        assert_eq!(pending_count(&users), 2);
    }
}
