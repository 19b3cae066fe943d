use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fitness progress record. Append-only from the client's perspective;
/// `bmi` and `attendance_count` are computed server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressEntry {
    pub id: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub bmi: Option<f64>,
    pub attendance_count: u32,
    pub recorded_date: DateTime<Utc>,
}

/// Payload for a new progress entry. At least one of the two measurements
/// should be present; the form enforces that before submitting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProgress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl NewProgress {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.height.is_none()
    }
}
