//! Wire documents as the remote collections return them.
//!
//! Field names are camelCase on the wire. Timestamps arrive in any of
//! the [`RemoteTimestamp`] shapes; conversion into domain records
//! normalizes them here, once, tagging each document with its
//! store-assigned id. A document that fails to parse is the caller's to
//! skip, not a reason to abort a whole listing.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::meeting::{Meeting, NewMeeting};
use crate::protocol::Document;
use crate::task::{NewTask, Priority, Task, TaskStatus};
use crate::timestamp::RemoteTimestamp;

fn default_status() -> String {
    TaskStatus::PENDING.to_string()
}

/// A task document on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDoc {
    pub member_id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_by: RemoteTimestamp,
    #[serde(default)]
    pub priority: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub created_at: RemoteTimestamp,
    #[serde(default)]
    pub assigned_by: String,
}

impl TaskDoc {
    /// Build the document for a new task, applying the creation
    /// defaults: empty description, medium priority, pending status,
    /// assigned by "System", created now.
    pub fn new(member_id: u32, new: NewTask) -> TaskDoc {
        TaskDoc {
            member_id,
            title: new.title,
            description: new.description.unwrap_or_default(),
            due_by: new.due_by.into(),
            priority: new.priority.unwrap_or_default().to_string(),
            status: default_status(),
            created_at: Utc::now().into(),
            assigned_by: new.assigned_by.unwrap_or_else(|| "System".to_string()),
        }
    }

    /// Convert into a task tagged with its store-assigned id.
    pub fn into_task(self, id: String) -> TrackerResult<Task> {
        Ok(Task {
            id,
            member_id: self.member_id,
            title: self.title,
            description: self.description,
            due_by: self.due_by.normalize()?,
            priority: Priority::parse_lossy(&self.priority),
            status: TaskStatus::from(self.status),
            created_at: self.created_at.normalize()?,
            assigned_by: self.assigned_by,
        })
    }
}

/// A meeting document on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDoc {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: RemoteTimestamp,
    pub end_date: RemoteTimestamp,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub created_at: RemoteTimestamp,
    #[serde(default)]
    pub created_by: String,
}

impl MeetingDoc {
    /// Build the document for a new meeting, applying the creation
    /// defaults: empty description, no attendees, location "Virtual",
    /// created by "System", created now.
    pub fn new(new: NewMeeting) -> MeetingDoc {
        MeetingDoc {
            title: new.title,
            description: new.description.unwrap_or_default(),
            start_date: new.start.into(),
            end_date: new.end.into(),
            attendees: new.attendees.unwrap_or_default(),
            location: new.location.unwrap_or_else(|| "Virtual".to_string()),
            created_at: Utc::now().into(),
            created_by: new.created_by.unwrap_or_else(|| "System".to_string()),
        }
    }

    /// Convert into a meeting tagged with its store-assigned id.
    pub fn into_meeting(self, id: String) -> TrackerResult<Meeting> {
        Ok(Meeting {
            id,
            title: self.title,
            description: self.description,
            start: self.start_date.normalize()?,
            end: self.end_date.normalize()?,
            attendees: self.attendees,
            location: self.location,
            created_at: self.created_at.normalize()?,
            created_by: self.created_by,
        })
    }
}

/// Parse a listed task document.
pub fn task_from_document(doc: Document) -> TrackerResult<Task> {
    let parsed: TaskDoc = serde_json::from_value(doc.fields)?;
    parsed.into_task(doc.id)
}

/// Parse a listed meeting document.
pub fn meeting_from_document(doc: Document) -> TrackerResult<Meeting> {
    let parsed: MeetingDoc = serde_json::from_value(doc.fields)?;
    parsed.into_meeting(doc.id)
}
