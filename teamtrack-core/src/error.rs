//! Error types for the teamtrack ecosystem.

use thiserror::Error;

use crate::timestamp::TimestampError;

/// Errors that can occur in tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A create/update/delete against a remote collection failed.
    #[error("Remote write failed: {0}")]
    RemoteWrite(String),

    /// Listing a remote collection failed.
    #[error("Remote read failed: {0}")]
    RemoteRead(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store binary '{0}' not found in PATH")]
    StoreNotInstalled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
