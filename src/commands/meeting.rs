use anyhow::Result;
use owo_colors::OwoColorize;

use teamtrack_core::NewMeeting;

use crate::render::Render;
use crate::tracker::Tracker;

pub async fn add(
    tracker: &mut Tracker,
    title: String,
    start: String,
    end: String,
    location: Option<String>,
    description: Option<String>,
    attendees: Vec<String>,
) -> Result<()> {
    let start = super::parse_datetime(&start)?;
    let end = super::parse_datetime(&end)?;

    if end <= start {
        anyhow::bail!("Meeting end must be after its start");
    }

    let new = NewMeeting {
        title,
        start,
        end,
        description,
        attendees: if attendees.is_empty() {
            None
        } else {
            Some(attendees)
        },
        location,
        created_by: None,
    };

    let meeting = tracker.add_meeting(new).await?;
    println!("Created {}", meeting.render());
    Ok(())
}

pub async fn list(tracker: &mut Tracker) -> Result<()> {
    tracker.refresh_meetings().await?;

    let meetings = tracker.state().meetings();
    if meetings.is_empty() {
        println!("{}", "No meetings found".dimmed());
        return Ok(());
    }

    for meeting in meetings {
        println!("{}", meeting.render());
    }

    Ok(())
}

pub async fn rm(tracker: &mut Tracker, id: String) -> Result<()> {
    tracker.refresh_meetings().await?;
    tracker.delete_meeting(&id).await?;
    println!("Deleted meeting {id}");
    Ok(())
}
