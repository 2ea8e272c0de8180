pub mod calendar;
pub mod meeting;
pub mod task;
pub mod team;
pub mod upcoming;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a date/time argument: "2025-03-20T15:00" or a bare
/// "2025-03-20" (read as midnight). Times are UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    anyhow::bail!(
        "Invalid date '{}'. Expected YYYY-MM-DDTHH:MM or YYYY-MM-DD",
        s
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_with_time() {
        assert_eq!(
            parse_datetime("2025-03-20T15:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_bare_date() {
        assert_eq!(
            parse_datetime("2025-03-20").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("tomorrow").is_err());
    }
}
