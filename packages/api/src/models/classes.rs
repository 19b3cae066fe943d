use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Active,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Active => "active",
            ClassStatus::Cancelled => "cancelled",
            ClassStatus::Completed => "completed",
            ClassStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class offering. Server-owned: the client never mutates one directly,
/// only through booking actions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassOffering {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trainer_id: String,
    pub trainer_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Minutes, derived server-side from start/end.
    pub duration: u32,
    pub capacity: u32,
    pub price: f64,
    pub status: ClassStatus,
    pub enrolled_count: u32,
}

impl ClassOffering {
    /// Booking is withheld client-side once enrollment reaches capacity,
    /// regardless of server enforcement.
    pub fn is_full(&self) -> bool {
        self.enrolled_count >= self.capacity
    }
}

/// Payload for a trainer creating a class. The server derives `duration`
/// and stamps the trainer's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewClass {
    pub name: String,
    pub description: String,
    pub trainer_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub capacity: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(enrolled: u32, capacity: u32) -> ClassOffering {
        ClassOffering {
            id: "c1".to_string(),
            name: "Yoga".to_string(),
            description: "Morning yoga".to_string(),
            trainer_id: "t1".to_string(),
            trainer_name: "T".to_string(),
            start_time: "2025-06-01T09:00:00Z".parse().unwrap(),
            end_time: "2025-06-01T10:00:00Z".parse().unwrap(),
            duration: 60,
            capacity,
            price: 15.0,
            status: ClassStatus::Active,
            enrolled_count: enrolled,
        }
    }

    #[test]
    fn class_is_full_exactly_at_capacity() {
        assert!(!offering(9, 10).is_full());
        assert!(offering(10, 10).is_full());
        assert!(offering(11, 10).is_full());
    }

    #[test]
    fn status_parses_and_tolerates_new_values() {
        assert_eq!(
            serde_json::from_str::<ClassStatus>("\"active\"").unwrap(),
            ClassStatus::Active
        );
        assert_eq!(
            serde_json::from_str::<ClassStatus>("\"archived\"").unwrap(),
            ClassStatus::Unknown
        );
    }
}
