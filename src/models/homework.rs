//! Homework record structure.

use serde::{Deserialize, Serialize};

/// One homework entry as returned by the status API.
///
/// Both fields are optional on the wire: a record missing either one still
/// deserializes, is logged, and is skipped during change detection instead of
/// aborting the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Homework {
    /// Submission name, unique per homework
    #[serde(default)]
    pub homework_name: Option<String>,

    /// Raw review status string
    #[serde(default)]
    pub status: Option<String>,
}

impl Homework {
    /// Build a record with both fields set.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            homework_name: Some(name.into()),
            status: Some(status.into()),
        }
    }
}
