use anyhow::Result;
use owo_colors::OwoColorize;
use teamtrack_core::ROSTER;

use crate::render::Render;
use crate::tracker::Tracker;
use crate::views;

/// Show the roster with each member's pending task count.
pub async fn run(tracker: &mut Tracker) -> Result<()> {
    tracker.refresh_tasks().await?;

    for member in &ROSTER {
        let pending = views::pending_tasks_count(tracker.state(), member.id);
        let count_tag = match pending {
            0 => "no pending tasks".dimmed().to_string(),
            1 => "1 pending task".to_string(),
            n => format!("{n} pending tasks"),
        };
        println!("{:>2}. {} {}", member.id, member.render(), count_tag);
    }

    Ok(())
}
