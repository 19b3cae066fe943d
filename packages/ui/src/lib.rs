//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_api, use_auth, use_payments, use_session, AuthProvider, LogoutButton, SessionState};

mod role;
pub use role::{dashboard_kind, DashboardKind};

mod alert;
pub use alert::{alert, confirm};

mod navbar;
pub use navbar::AppHeader;

mod tabs;
pub use tabs::{TabBar, TabItem};

mod classes;
pub use classes::ClassCard;

mod bookings;
pub use bookings::BookingCard;

mod class_form;
pub use class_form::ClassForm;

mod progress;
pub use progress::{ProgressForm, ProgressList};

mod notifications;
pub use notifications::NotificationList;

mod feedback;
pub use feedback::FeedbackList;

mod users;
pub use users::{PendingApprovals, UserTable};

mod stats;
pub use stats::StatsGrid;
