//! Timestamp values as the remote store returns them.
//!
//! The store is not consistent about time: a field may come back as an
//! RFC 3339 string, as epoch milliseconds, or as the store's deferred
//! `{ seconds, nanos }` wrapper that has to be materialized explicitly.
//! All sniffing happens here, once, when a document is ingested; past
//! that boundary time is always a `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("Unparseable timestamp '{0}'")]
    Unparseable(String),

    #[error("Timestamp out of range: {seconds}s {nanos}ns")]
    OutOfRange { seconds: i64, nanos: u32 },
}

/// A timestamp field as it may appear in a remote document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteTimestamp {
    /// Epoch milliseconds
    EpochMillis(i64),
    /// RFC 3339 or a plain date/datetime string
    Text(String),
    /// Store-native deferred timestamp, materialized on normalization
    Deferred { seconds: i64, nanos: u32 },
}

impl RemoteTimestamp {
    /// Normalize to UTC. Strings accept RFC 3339 first, then the plain
    /// `YYYY-MM-DDTHH:MM[:SS]` and `YYYY-MM-DD` forms (read as UTC).
    pub fn normalize(&self) -> Result<DateTime<Utc>, TimestampError> {
        match self {
            RemoteTimestamp::EpochMillis(ms) => {
                Utc.timestamp_millis_opt(*ms)
                    .single()
                    .ok_or(TimestampError::OutOfRange {
                        seconds: ms / 1000,
                        nanos: 0,
                    })
            }
            RemoteTimestamp::Text(s) => parse_text(s),
            RemoteTimestamp::Deferred { seconds, nanos } => Utc
                .timestamp_opt(*seconds, *nanos)
                .single()
                .ok_or(TimestampError::OutOfRange {
                    seconds: *seconds,
                    nanos: *nanos,
                }),
        }
    }
}

impl From<DateTime<Utc>> for RemoteTimestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        RemoteTimestamp::Text(dt.to_rfc3339())
    }
}

fn parse_text(s: &str) -> Result<DateTime<Utc>, TimestampError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    // Bare dates read as midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    Err(TimestampError::Unparseable(s.to_string()))
}
