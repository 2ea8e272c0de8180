//! Application state: the in-process mirror of the two collections.

use teamtrack_core::{Meeting, Task};

/// The local cache of the `tasks` and `meetings` collections. The
/// tracker façade is the only writer; views and commands borrow it
/// read-only. Order is insertion order, preserved across refreshes.
#[derive(Debug, Default)]
pub struct TrackerState {
    tasks: Vec<Task>,
    meetings: Vec<Meeting>,
}

impl TrackerState {
    pub fn new() -> TrackerState {
        TrackerState::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn push_meeting(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
    }

    pub(crate) fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove the first task with a matching id.
    pub(crate) fn remove_task(&mut self, id: &str) {
        if let Some(index) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(index);
        }
    }

    /// Remove the first meeting with a matching id.
    pub(crate) fn remove_meeting(&mut self, id: &str) {
        if let Some(index) = self.meetings.iter().position(|m| m.id == id) {
            self.meetings.remove(index);
        }
    }

    /// Full overwrite from a fresh listing; no merge semantics.
    pub(crate) fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Full overwrite from a fresh listing; no merge semantics.
    pub(crate) fn replace_meetings(&mut self, meetings: Vec<Meeting>) {
        self.meetings = meetings;
    }
}
