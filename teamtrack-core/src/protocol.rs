//! Store protocol types.
//!
//! Defines the JSON protocol used for communication between the tracker
//! and store binaries over stdin/stdout. Any executable that speaks the
//! protocol can back the tracker; it owns its own credentials and only
//! receives the opaque params from the tracker config.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two document collections the tracker mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Tasks,
    Meetings,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Tasks => "tasks",
            Collection::Meetings => "meetings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Commands that store binaries must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    CreateDocument,
    ListDocuments,
    UpdateDocument,
    DeleteDocument,
}

/// Request sent from the tracker to the store binary.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from the store binary to the tracker.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// A stored document: the store-assigned opaque id plus its flat field
/// map, exactly as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: serde_json::Value,
}

/// Payload returned by a successful `CreateDocument`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub id: String,
}
