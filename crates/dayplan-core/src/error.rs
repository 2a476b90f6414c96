//! Error types for dayplan-core.
//!
//! Every kind is recoverable: the registry remains usable after any failure,
//! and each failure is also reported through the notification sinks.

use chrono::NaiveTime;
use thiserror::Error;

/// Core error type for dayplan-core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Start is not strictly before end
    #[error("invalid interval: start ({start}) must be before end ({end})")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    /// Proposed interval intersects a stored one; carries the conflicting name
    #[error("interval clashes with '{conflicting}'")]
    Overlap { conflicting: String },

    /// No stored activity matches the name (case-insensitive)
    #[error("no plan named '{name}'")]
    NotFound { name: String },

    /// Malformed time text
    #[error("malformed time '{text}' (expected HH:MM)")]
    InvalidTime { text: String },

    /// Unrecognized priority token
    #[error("unrecognized priority '{token}' (expected High, Medium or Low)")]
    InvalidPriority { token: String },

    /// Activity name is empty or whitespace
    #[error("plan name cannot be empty")]
    EmptyName,

    /// Another stored activity already uses the name (case-insensitive)
    #[error("a plan named '{name}' already exists")]
    DuplicateName { name: String },
}

/// Result type alias for PlanError
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
