use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Member feedback shown on the trainer dashboard. View-only here; members
/// submit it through the backend's feedback endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub member_name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
