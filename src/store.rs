// src/store.rs

//! Last-seen status memory.

use std::collections::HashMap;

/// In-memory map of homework name to the last status seen for it.
///
/// Lives for the process lifetime only. A restart forgets everything, so the
/// first poll after a restart re-announces the current status of whatever it
/// sees; that is the intended first-sight behavior, not a defect.
#[derive(Debug, Clone, Default)]
pub struct StatusStore {
    seen: HashMap<String, String>,
}

impl StatusStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last status recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.seen.get(name).map(String::as_str)
    }

    /// Record `status` as the latest seen for `name`.
    pub fn record(&mut self, name: &str, status: &str) {
        self.seen.insert(name.to_string(), status.to_string());
    }

    /// Number of homeworks tracked.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True when nothing has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
