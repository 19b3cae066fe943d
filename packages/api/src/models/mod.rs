//! Wire models for every backend resource.
//!
//! All structs deserialize a subset of the server document; unknown fields
//! are ignored, so the client keeps working when the backend grows.

use serde::Deserialize;

mod admin;
mod auth;
mod bookings;
mod classes;
mod feedback;
mod notifications;
mod progress;

pub use admin::{pending_count, DashboardStats, ManagedUser};
pub use auth::{NewUser, Token};
pub use bookings::{Booking, BookingStatus, PaymentOrder, PaymentStatus};
pub use classes::{ClassOffering, ClassStatus, NewClass};
pub use feedback::FeedbackEntry;
pub use notifications::{unread_count, Notification};
pub use progress::{NewProgress, ProgressEntry};

/// Body of the backend's plain acknowledgement responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ack {
    pub message: String,
}
