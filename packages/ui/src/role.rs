//! Role to dashboard mapping.

use session::Role;

/// Which dashboard an authenticated user gets. Total over every role value,
/// including ones this client does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Member,
    Trainer,
    Admin,
    /// Role with no dashboard in this client: render an explicit error view,
    /// never a blank page.
    Unsupported,
}

pub fn dashboard_kind(role: Role) -> DashboardKind {
    match role {
        Role::Member => DashboardKind::Member,
        Role::Trainer => DashboardKind::Trainer,
        Role::Admin => DashboardKind::Admin,
        Role::Unknown => DashboardKind::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_gets_exactly_one_distinct_dashboard() {
        let kinds = [
            dashboard_kind(Role::Member),
            dashboard_kind(Role::Trainer),
            dashboard_kind(Role::Admin),
        ];
        assert_eq!(
            kinds,
            [DashboardKind::Member, DashboardKind::Trainer, DashboardKind::Admin]
        );
    }

    #[test]
    fn unrecognized_roles_get_the_error_view() {
        assert_eq!(dashboard_kind(Role::Unknown), DashboardKind::Unsupported);
    }
}
