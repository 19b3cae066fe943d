//! # API crate — REST client for the Supreme Fitness backend
//!
//! Every HTTP call the dashboards make funnels through
//! [`ApiClient::request`]: one place builds the JSON request, one place
//! attaches the bearer token from the session store, one place normalizes
//! failures into [`ApiError`]. The typed endpoint methods on [`ApiClient`]
//! cover the whole backend surface:
//!
//! - **Authentication**: `login`, `register`
//! - **Classes**: `classes`, `trainer_classes`, `create_class`
//! - **Bookings**: `member_bookings`, `book_class`, `cancel_booking`
//! - **Payments**: `create_payment_order`, `complete_payment`
//! - **Progress**: `member_progress`, `add_progress`
//! - **Notifications**: `notifications`, `mark_notification_read`
//! - **Users** (admin): `users`, `approve_user`, `deactivate_user`
//! - **Analytics** (admin): `dashboard_stats`
//! - **Feedback** (trainer): `trainer_feedback`
//!
//! [`payment`] holds the provider seam behind the simulated checkout flow.

mod client;
pub use client::ApiClient;

mod config;
pub use config::ApiConfig;

mod error;
pub use error::ApiError;

pub mod models;
pub use models::{
    Ack, Booking, BookingStatus, ClassOffering, ClassStatus, DashboardStats, FeedbackEntry,
    ManagedUser, NewClass, NewProgress, NewUser, Notification, PaymentOrder, PaymentStatus,
    ProgressEntry, Token,
};

pub mod payment;
pub use payment::{PaymentProvider, SharedPaymentProvider, SimulatedPayments};

pub use session::{Role, UserProfile};
