use anyhow::Result;
use owo_colors::OwoColorize;
use teamtrack_core::{NewTask, Priority, TaskStatus, find_member};

use crate::render::Render;
use crate::tracker::Tracker;
use crate::views;

pub async fn add(
    tracker: &mut Tracker,
    member: u32,
    title: String,
    due: String,
    priority: Option<String>,
    description: Option<String>,
    assigned_by: Option<String>,
) -> Result<()> {
    let due_by = super::parse_datetime(&due)?;
    let priority = priority
        .map(|p| p.parse::<Priority>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    if find_member(member).is_none() {
        // not an error: tasks may be assigned to ids off the roster
        eprintln!("note: member {member} is not on the roster");
    }

    let new = NewTask {
        title,
        due_by,
        description,
        priority,
        assigned_by,
    };

    let task = tracker.add_task(member, new).await?;
    println!("Created {}", task.render());
    Ok(())
}

pub async fn list(tracker: &mut Tracker, member: Option<u32>) -> Result<()> {
    tracker.refresh_tasks().await?;

    let tasks = match member {
        Some(id) => views::tasks_by_member(tracker.state(), id),
        None => tracker.state().tasks().iter().collect(),
    };

    if tasks.is_empty() {
        println!("{}", "No tasks found".dimmed());
        return Ok(());
    }

    for task in tasks {
        let assignee = match find_member(task.member_id) {
            Some(m) => m.name,
            None => "(unknown)",
        };
        println!("{} {}", task.render(), format!("-> {assignee}").dimmed());
    }

    Ok(())
}

pub async fn status(tracker: &mut Tracker, id: String, status: String) -> Result<()> {
    tracker.refresh_tasks().await?;
    tracker
        .update_task_status(&id, TaskStatus::from(status))
        .await?;
    println!("Updated task {id}");
    Ok(())
}

pub async fn rm(tracker: &mut Tracker, id: String) -> Result<()> {
    tracker.refresh_tasks().await?;
    tracker.delete_task(&id).await?;
    println!("Deleted task {id}");
    Ok(())
}
