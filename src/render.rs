//! Terminal rendering for tracker types.
//!
//! Extension trait adding colored one-line rendering, plus the date and
//! priority formatting helpers shared by the commands.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use teamtrack_core::{Meeting, Priority, Task, TeamMember};

use crate::views::CalendarEvent;

/// Format a timestamp as a short date, e.g. "Mar 20, 2025".
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Format a timestamp with the time of day, e.g. "Mar 20, 2025, 03:00 PM".
pub fn format_date_time(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Display color for a priority, medium being the default shade.
pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "#4CAF50",
        Priority::Medium => "#FF9800",
        Priority::High => "#F44336",
    }
}

/// Apply an RGB hex color to text. Values that are not 6-digit hex
/// (the "#gray" fallback among them) pass through unstyled.
fn hex_colored(text: &str, hex: &str) -> String {
    let h = hex.strip_prefix('#').unwrap_or(hex);
    if h.len() == 6
        && let Ok(r) = u8::from_str_radix(&h[0..2], 16)
        && let Ok(g) = u8::from_str_radix(&h[2..4], 16)
        && let Ok(b) = u8::from_str_radix(&h[4..6], 16)
    {
        return text.truecolor(r, g, b).to_string();
    }
    text.to_string()
}

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Task {
    fn render(&self) -> String {
        let title = hex_colored(&self.title, priority_color(self.priority));
        let due = format!("due {}", format_date(&self.due_by));
        format!(
            "[{}] {} {} {}",
            self.id,
            title,
            due.dimmed(),
            format!("({})", self.status).dimmed()
        )
    }
}

impl Render for Meeting {
    fn render(&self) -> String {
        let span = format!(
            "{} - {}",
            format_date_time(&self.start),
            self.end.format("%I:%M %p")
        );
        format!(
            "[{}] {} {} {}",
            self.id,
            self.title.bold(),
            span.dimmed(),
            format!("@ {}", self.location).dimmed()
        )
    }
}

impl Render for TeamMember {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            hex_colored(self.name, self.color).bold(),
            self.role.as_str(),
            format!("({})", self.major).dimmed()
        )
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let when = match self.end {
            Some(end) => format!(
                "{} - {}",
                format_date_time(&self.start),
                end.format("%I:%M %p")
            ),
            None => format_date_time(&self.start),
        };
        format!(
            "{} {}",
            hex_colored(&self.title, &self.background_color),
            when.dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 20, 2025");
    }

    #[test]
    fn test_format_date_single_digit_day() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 5, 15, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 5, 2025");
    }

    #[test]
    fn test_format_date_time() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        assert_eq!(format_date_time(&ts), "Mar 20, 2025, 03:00 PM");
    }

    #[test]
    fn test_hex_colored_fallback_passes_through() {
        assert_eq!(hex_colored("Orphaned", "#gray"), "Orphaned");
        assert_eq!(hex_colored("Orphaned", "nope"), "Orphaned");
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(priority_color(Priority::Low), "#4CAF50");
        assert_eq!(priority_color(Priority::Medium), "#FF9800");
        assert_eq!(priority_color(Priority::High), "#F44336");
    }
}
