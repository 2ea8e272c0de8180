//! Meeting records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team meeting. No status field; the lifecycle is create/delete only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Attendee identifiers, opaque to the tracker
    pub attendees: Vec<String>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Input for creating a meeting. Defaults: empty description, no
/// attendees, location "Virtual", created by "System".
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: Option<String>,
    pub attendees: Option<Vec<String>>,
    pub location: Option<String>,
    pub created_by: Option<String>,
}
