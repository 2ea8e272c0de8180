//! Core types for the teamtrack ecosystem.
//!
//! This crate provides the types shared by the tracker CLI and store
//! backends:
//! - `TeamMember`, `Task` and `Meeting` domain records
//! - wire documents and timestamp normalization for the remote store
//! - `protocol` module for the CLI-store communication protocol

pub mod document;
pub mod error;
pub mod meeting;
pub mod member;
pub mod protocol;
pub mod task;
pub mod timestamp;

pub use error::{TrackerError, TrackerResult};
pub use meeting::{Meeting, NewMeeting};
pub use member::{ROSTER, Role, TeamMember, find_member};
pub use task::{NewTask, Priority, Task, TaskStatus};
