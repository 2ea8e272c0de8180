use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::tracker::Tracker;
use crate::views;

/// List meetings that have not started yet, soonest first.
pub async fn run(tracker: &mut Tracker) -> Result<()> {
    tracker.refresh_meetings().await?;

    let upcoming = views::upcoming_meetings(tracker.state(), Utc::now());
    if upcoming.is_empty() {
        println!("{}", "No upcoming meetings".dimmed());
        return Ok(());
    }

    for meeting in upcoming {
        println!("{}", meeting.render());
    }

    Ok(())
}
