use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Booked,
    Cancelled,
    Attended,
    #[serde(rename = "no_show")]
    NoShow,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "booked",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Attended => "attended",
            BookingStatus::NoShow => "no_show",
            BookingStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booking of the signed-in member. Transitions (cancel, pay) go through
/// the API; the client re-fetches the list instead of patching this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub class_start_time: DateTime<Utc>,
    pub booking_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

impl Booking {
    pub fn can_cancel(&self) -> bool {
        self.status == BookingStatus::Booked
    }

    pub fn can_pay(&self) -> bool {
        self.can_cancel() && self.payment_status == PaymentStatus::Pending
    }
}

/// Response of the create-order endpoint; `order_id` is what the complete
/// call is addressed to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: BookingStatus, payment_status: PaymentStatus) -> Booking {
        Booking {
            id: "b1".to_string(),
            class_id: "c1".to_string(),
            class_name: "Yoga".to_string(),
            class_start_time: "2025-06-01T09:00:00Z".parse().unwrap(),
            booking_time: "2025-05-20T12:00:00Z".parse().unwrap(),
            status,
            payment_status,
        }
    }

    #[test]
    fn pay_is_offered_only_while_booked_and_pending() {
        assert!(booking(BookingStatus::Booked, PaymentStatus::Pending).can_pay());
        assert!(!booking(BookingStatus::Booked, PaymentStatus::Completed).can_pay());
        assert!(!booking(BookingStatus::Cancelled, PaymentStatus::Pending).can_pay());
    }

    #[test]
    fn cancel_is_offered_only_while_booked() {
        assert!(booking(BookingStatus::Booked, PaymentStatus::Pending).can_cancel());
        assert!(!booking(BookingStatus::Attended, PaymentStatus::Completed).can_cancel());
        assert!(!booking(BookingStatus::Cancelled, PaymentStatus::Pending).can_cancel());
    }
}
