//! The CRUD façade.
//!
//! Keeps the local [`TrackerState`] consistent with the backing store.
//! Creates and deletes touch the store first and mutate the cache only
//! on success. Status updates are the exception: the local mutation is
//! applied before the remote write and is not rolled back on failure,
//! so local and remote can diverge until the next refresh.

use serde_json::json;

use teamtrack_core::document::{
    MeetingDoc, TaskDoc, meeting_from_document, task_from_document,
};
use teamtrack_core::protocol::Collection;
use teamtrack_core::{Meeting, NewMeeting, NewTask, Task, TaskStatus, TrackerResult};

use crate::state::TrackerState;
use crate::store::Backend;

pub struct Tracker {
    state: TrackerState,
    backend: Backend,
}

impl Tracker {
    pub fn new(backend: Backend) -> Tracker {
        Tracker {
            state: TrackerState::new(),
            backend,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Create a task assigned to a member. The member id is not checked
    /// against the roster. Returns the task with its assigned id.
    pub async fn add_task(&mut self, member_id: u32, new: NewTask) -> TrackerResult<Task> {
        let doc = TaskDoc::new(member_id, new);
        let fields = serde_json::to_value(&doc)?;

        let id = self
            .backend
            .create(Collection::Tasks, fields)
            .await
            .inspect_err(|err| eprintln!("warning: could not create task: {err}"))?;

        let task = doc.into_task(id)?;
        self.state.push_task(task.clone());
        Ok(task)
    }

    /// Create a meeting. Returns the meeting with its assigned id.
    pub async fn add_meeting(&mut self, new: NewMeeting) -> TrackerResult<Meeting> {
        let doc = MeetingDoc::new(new);
        let fields = serde_json::to_value(&doc)?;

        let id = self
            .backend
            .create(Collection::Meetings, fields)
            .await
            .inspect_err(|err| eprintln!("warning: could not create meeting: {err}"))?;

        let meeting = doc.into_meeting(id)?;
        self.state.push_meeting(meeting.clone());
        Ok(meeting)
    }

    /// Replace a task's status. An unknown id is a silent no-op with no
    /// store round-trip. When found, the local status changes first and
    /// stays changed even if persisting the field fails; the next
    /// `refresh_tasks` reconciles.
    pub async fn update_task_status(
        &mut self,
        task_id: &str,
        status: TaskStatus,
    ) -> TrackerResult<()> {
        let Some(task) = self.state.find_task_mut(task_id) else {
            return Ok(());
        };
        task.status = status.clone();

        let result = self
            .backend
            .update(Collection::Tasks, task_id, json!({ "status": status }))
            .await;

        if let Err(err) = &result {
            eprintln!("warning: could not persist status for task {task_id}: {err}");
        }
        result
    }

    /// Delete a task. The store delete runs first; the cache entry is
    /// removed only once it succeeds.
    pub async fn delete_task(&mut self, task_id: &str) -> TrackerResult<()> {
        if let Err(err) = self.backend.delete(Collection::Tasks, task_id).await {
            eprintln!("warning: could not delete task {task_id}: {err}");
            return Err(err);
        }
        self.state.remove_task(task_id);
        Ok(())
    }

    /// Delete a meeting. Same ordering as `delete_task`.
    pub async fn delete_meeting(&mut self, meeting_id: &str) -> TrackerResult<()> {
        if let Err(err) = self.backend.delete(Collection::Meetings, meeting_id).await {
            eprintln!("warning: could not delete meeting {meeting_id}: {err}");
            return Err(err);
        }
        self.state.remove_meeting(meeting_id);
        Ok(())
    }

    /// Overwrite the task cache with a fresh listing. A document that
    /// fails to parse or normalize is skipped with a warning, never an
    /// abort.
    pub async fn refresh_tasks(&mut self) -> TrackerResult<()> {
        let docs = self.backend.list(Collection::Tasks).await?;

        let mut tasks = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = doc.id.clone();
            match task_from_document(doc) {
                Ok(task) => tasks.push(task),
                Err(err) => eprintln!("warning: skipping task document {id}: {err}"),
            }
        }

        self.state.replace_tasks(tasks);
        Ok(())
    }

    /// Overwrite the meeting cache with a fresh listing, same skip
    /// semantics as `refresh_tasks`.
    pub async fn refresh_meetings(&mut self) -> TrackerResult<()> {
        let docs = self.backend.list(Collection::Meetings).await?;

        let mut meetings = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = doc.id.clone();
            match meeting_from_document(doc) {
                Ok(meeting) => meetings.push(meeting),
                Err(err) => eprintln!("warning: skipping meeting document {id}: {err}"),
            }
        }

        self.state.replace_meetings(meetings);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;
    use teamtrack_core::Priority;

    use crate::store::MemoryStore;

    fn memory_tracker() -> Tracker {
        Tracker::new(Backend::Memory(MemoryStore::new()))
    }

    fn make_new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            due_by: Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
            description: None,
            priority: None,
            assigned_by: None,
        }
    }

    fn make_new_meeting(title: &str) -> NewMeeting {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        NewMeeting {
            title: title.to_string(),
            start,
            end: start + Duration::minutes(30),
            description: None,
            attendees: None,
            location: None,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_add_task_round_trip_with_defaults() {
        let mut tracker = memory_tracker();

        let task = tracker
            .add_task(
                3,
                NewTask {
                    title: "Write spec".to_string(),
                    due_by: Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
                    description: Some("first draft".to_string()),
                    priority: Some(Priority::High),
                    assigned_by: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(task.id, "1");
        assert_eq!(task.member_id, 3);
        assert_eq!(task.description, "first draft");
        assert_eq!(task.priority, Priority::High);
        assert!(task.status.is_pending());
        assert_eq!(task.assigned_by, "System");

        let cached = &tracker.state().tasks()[0];
        assert_eq!(cached, &task);
    }

    #[tokio::test]
    async fn test_update_task_status_mutates_in_place() {
        let mut tracker = memory_tracker();
        let task = tracker.add_task(1, make_new_task("t")).await.unwrap();

        tracker
            .update_task_status(&task.id, TaskStatus::from("in-progress"))
            .await
            .unwrap();

        assert_eq!(
            tracker.state().tasks()[0].status,
            TaskStatus::from("in-progress")
        );
    }

    #[tokio::test]
    async fn test_update_task_status_unknown_id_is_silent_noop() {
        let mut tracker = memory_tracker();
        tracker.add_task(1, make_new_task("t")).await.unwrap();

        tracker
            .update_task_status("404", TaskStatus::from("done"))
            .await
            .unwrap();

        assert!(tracker.state().tasks()[0].status.is_pending());
    }

    #[tokio::test]
    async fn test_delete_task_twice_is_idempotent() {
        let mut tracker = memory_tracker();
        let task = tracker.add_task(1, make_new_task("t")).await.unwrap();

        tracker.delete_task(&task.id).await.unwrap();
        assert!(tracker.state().tasks().is_empty());

        // the memory store treats a redundant delete as a no-op
        tracker.delete_task(&task.id).await.unwrap();
        assert!(tracker.state().tasks().is_empty());
    }

    #[tokio::test]
    async fn test_delete_meeting_removes_from_cache() {
        let mut tracker = memory_tracker();
        let meeting = tracker
            .add_meeting(make_new_meeting("Standup"))
            .await
            .unwrap();
        assert_eq!(meeting.location, "Virtual");

        tracker.delete_meeting(&meeting.id).await.unwrap();
        assert!(tracker.state().meetings().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_tasks_overwrites_and_normalizes() {
        let mut tracker = memory_tracker();

        // Seed documents through the backend directly, in the mixed
        // timestamp shapes a remote store produces.
        let due = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        tracker
            .backend
            .create(
                Collection::Tasks,
                json!({
                    "memberId": 2,
                    "title": "From the store",
                    "dueBy": { "seconds": due.timestamp(), "nanos": 0 },
                    "createdAt": due.timestamp_millis(),
                }),
            )
            .await
            .unwrap();

        tracker.refresh_tasks().await.unwrap();

        let tasks = tracker.state().tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "From the store");
        assert_eq!(tasks[0].due_by, due);
        assert!(tasks[0].status.is_pending());
    }

    #[tokio::test]
    async fn test_refresh_skips_unparseable_documents() {
        let mut tracker = memory_tracker();

        tracker
            .backend
            .create(
                Collection::Meetings,
                json!({
                    "title": "Broken",
                    "startDate": "not a date",
                    "endDate": "2025-03-20T16:00:00Z",
                    "createdAt": "2025-03-01T09:00:00Z",
                }),
            )
            .await
            .unwrap();
        tracker
            .backend
            .create(
                Collection::Meetings,
                json!({
                    "title": "Fine",
                    "startDate": "2025-03-20T15:00:00Z",
                    "endDate": "2025-03-20T16:00:00Z",
                    "createdAt": "2025-03-01T09:00:00Z",
                }),
            )
            .await
            .unwrap();

        tracker.refresh_meetings().await.unwrap();

        let meetings = tracker.state().meetings();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].title, "Fine");
    }
}
