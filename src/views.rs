//! Derived read-only views over the tracker state.
//!
//! Pure functions: no store round-trips, no mutation. Callers pass the
//! clock where "now" matters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use teamtrack_core::{Meeting, Priority, Task, TaskStatus, find_member};

use crate::state::TrackerState;

const MEETING_COLOR: &str = "#4CAF50";
// Unresolved member ids keep the historical fallback the UI renders as
// its default gray, plus an explicit name placeholder.
const UNKNOWN_MEMBER_COLOR: &str = "#gray";
const UNKNOWN_MEMBER_NAME: &str = "(unknown)";

/// All tasks assigned to a member, in cache order.
pub fn tasks_by_member(state: &TrackerState, member_id: u32) -> Vec<&Task> {
    state
        .tasks()
        .iter()
        .filter(|t| t.member_id == member_id)
        .collect()
}

/// How many of a member's tasks still carry the pending sentinel.
pub fn pending_tasks_count(state: &TrackerState, member_id: u32) -> usize {
    state
        .tasks()
        .iter()
        .filter(|t| t.member_id == member_id && t.status.is_pending())
        .count()
}

/// Meetings starting strictly after `now`, soonest first.
pub fn upcoming_meetings(state: &TrackerState, now: DateTime<Utc>) -> Vec<&Meeting> {
    let mut upcoming: Vec<&Meeting> = state
        .meetings()
        .iter()
        .filter(|m| m.start > now)
        .collect();
    upcoming.sort_by_key(|m| m.start);
    upcoming
}

/// A calendar entry derived from a task or a meeting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub background_color: String,
    pub border_color: String,
    #[serde(rename = "extendedProps")]
    pub details: EventDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventDetails {
    #[serde(rename_all = "camelCase")]
    Task {
        task_id: String,
        member_id: u32,
        priority: Priority,
        status: TaskStatus,
        description: String,
    },
    #[serde(rename_all = "camelCase")]
    Meeting {
        meeting_id: String,
        attendees: Vec<String>,
        location: String,
        description: String,
    },
}

/// One calendar entry per task (titled with the assignee, colored by the
/// member color, starting at the due time) and per meeting (green, with
/// the full span). An unresolved member id is not an error; the entry
/// gets the fallback color and name.
pub fn calendar_events(state: &TrackerState) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(state.tasks().len() + state.meetings().len());

    for task in state.tasks() {
        let (name, color) = match find_member(task.member_id) {
            Some(member) => (member.name, member.color),
            None => (UNKNOWN_MEMBER_NAME, UNKNOWN_MEMBER_COLOR),
        };

        events.push(CalendarEvent {
            id: format!("task-{}", task.id),
            title: format!("{}: {}", name, task.title),
            start: task.due_by,
            end: None,
            background_color: color.to_string(),
            border_color: color.to_string(),
            details: EventDetails::Task {
                task_id: task.id.clone(),
                member_id: task.member_id,
                priority: task.priority,
                status: task.status.clone(),
                description: task.description.clone(),
            },
        });
    }

    for meeting in state.meetings() {
        events.push(CalendarEvent {
            id: format!("meeting-{}", meeting.id),
            title: format!("Meeting: {}", meeting.title),
            start: meeting.start,
            end: Some(meeting.end),
            background_color: MEETING_COLOR.to_string(),
            border_color: MEETING_COLOR.to_string(),
            details: EventDetails::Meeting {
                meeting_id: meeting.id.clone(),
                attendees: meeting.attendees.clone(),
                location: meeting.location.clone(),
                description: meeting.description.clone(),
            },
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn make_task(id: &str, member_id: u32, title: &str, status: &str) -> Task {
        let at = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        Task {
            id: id.to_string(),
            member_id,
            title: title.to_string(),
            description: String::new(),
            due_by: at,
            priority: Priority::Medium,
            status: TaskStatus::from(status),
            created_at: at,
            assigned_by: "System".to_string(),
        }
    }

    fn make_meeting(id: &str, title: &str, start: DateTime<Utc>) -> Meeting {
        Meeting {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            start,
            end: start + Duration::minutes(30),
            attendees: vec![],
            location: "Virtual".to_string(),
            created_at: start,
            created_by: "System".to_string(),
        }
    }

    fn state_with_tasks(tasks: Vec<Task>) -> TrackerState {
        let mut state = TrackerState::new();
        for task in tasks {
            state.push_task(task);
        }
        state
    }

    #[test]
    fn test_tasks_by_member_preserves_order() {
        let state = state_with_tasks(vec![
            make_task("1", 2, "first", "pending"),
            make_task("2", 1, "other member", "pending"),
            make_task("3", 2, "second", "done"),
        ]);

        let tasks = tasks_by_member(&state, 2);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_pending_count_matches_sentinel_only() {
        let state = state_with_tasks(vec![
            make_task("1", 2, "a", "pending"),
            make_task("2", 2, "b", "Pending"), // wrong casing does not count
            make_task("3", 2, "c", "done"),
            make_task("4", 1, "d", "pending"),
        ]);

        assert_eq!(pending_tasks_count(&state, 2), 1);
        assert_eq!(pending_tasks_count(&state, 1), 1);
        assert_eq!(pending_tasks_count(&state, 99), 0);
    }

    #[test]
    fn test_pending_count_drops_after_status_change() {
        let mut state = state_with_tasks(vec![make_task("1", 2, "a", "pending")]);
        assert_eq!(pending_tasks_count(&state, 2), 1);

        state.find_task_mut("1").unwrap().status = TaskStatus::from("in-progress");
        assert_eq!(pending_tasks_count(&state, 2), 0);
    }

    #[test]
    fn test_upcoming_meetings_filters_and_sorts() {
        let now = Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let mut state = TrackerState::new();
        state.push_meeting(make_meeting("1", "later", now + Duration::hours(5)));
        state.push_meeting(make_meeting("2", "past", now - Duration::hours(1)));
        state.push_meeting(make_meeting("3", "soon", now + Duration::hours(1)));
        state.push_meeting(make_meeting("4", "right now", now));

        let titles: Vec<&str> = upcoming_meetings(&state, now)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["soon", "later"]);
    }

    #[test]
    fn test_standup_scenario() {
        let t = Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap();
        let mut state = TrackerState::new();
        state.push_meeting(make_meeting("1", "Standup", t + Duration::hours(1)));

        let at_t = upcoming_meetings(&state, t);
        assert_eq!(at_t.len(), 1);
        assert_eq!(at_t[0].title, "Standup");

        assert!(upcoming_meetings(&state, t + Duration::hours(2)).is_empty());
    }

    #[test]
    fn test_calendar_event_for_known_member() {
        let state = state_with_tasks(vec![make_task("7", 3, "Write spec", "pending")]);

        let events = calendar_events(&state);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "task-7");
        assert_eq!(events[0].title, "Wesley Spangler: Write spec");
        assert_eq!(events[0].background_color, "#6a11cb");
        assert_eq!(events[0].border_color, "#6a11cb");
        assert_eq!(events[0].end, None);
    }

    #[test]
    fn test_calendar_event_for_unresolved_member() {
        let state = state_with_tasks(vec![make_task("7", 99, "Orphaned", "pending")]);

        let events = calendar_events(&state);
        assert_eq!(events[0].title, "(unknown): Orphaned");
        assert_eq!(events[0].background_color, "#gray");
    }

    #[test]
    fn test_calendar_event_for_meeting() {
        let start = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        let mut state = TrackerState::new();
        state.push_meeting(make_meeting("5", "Retro", start));

        let events = calendar_events(&state);
        assert_eq!(events[0].id, "meeting-5");
        assert_eq!(events[0].title, "Meeting: Retro");
        assert_eq!(events[0].background_color, "#4CAF50");
        assert_eq!(events[0].end, Some(start + Duration::minutes(30)));
        assert!(matches!(
            events[0].details,
            EventDetails::Meeting { ref location, .. } if location == "Virtual"
        ));
    }
}
