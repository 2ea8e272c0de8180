use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::tracker::Tracker;
use crate::views;

/// Print the calendar feed for all tasks and meetings, either as a
/// listing or as JSON for calendar widgets.
pub async fn run(tracker: &mut Tracker, json: bool) -> Result<()> {
    tracker.refresh_tasks().await?;
    tracker.refresh_meetings().await?;

    let mut events = views::calendar_events(tracker.state());
    events.sort_by_key(|e| e.start);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "Nothing on the calendar".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    Ok(())
}
