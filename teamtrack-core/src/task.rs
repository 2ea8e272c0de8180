//! Task records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse a wire value. Unrecognized values fall back to medium, the
    /// same fallback the priority color lookup uses.
    pub fn parse_lossy(s: &str) -> Priority {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Unknown priority '{s}'. Expected low, medium or high"
            )),
        }
    }
}

/// A task status. Free-form: any string may replace any other, so this is
/// a newtype rather than a closed enum. The canonical pending sentinel is
/// lower-case `"pending"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(pub String);

impl TaskStatus {
    pub const PENDING: &'static str = "pending";

    pub fn pending() -> TaskStatus {
        TaskStatus(Self::PENDING.to_string())
    }

    pub fn is_pending(&self) -> bool {
        self.0 == Self::PENDING
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        TaskStatus(s.to_string())
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus(s)
    }
}

/// A task assigned to a team member.
///
/// `member_id` is a roster reference but is never validated at write
/// time; display layers handle a dangling id. `id` is the store-assigned
/// opaque handle (the memory backend mints counter-based strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub member_id: u32,
    pub title: String,
    pub description: String,
    pub due_by: DateTime<Utc>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub assigned_by: String,
}

/// Input for creating a task. Optional fields take the documented
/// defaults: empty description, medium priority, assigned by "System".
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub due_by: DateTime<Utc>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub assigned_by: Option<String>,
}
