// src/pipeline/detect.rs

//! Status change detection.

use crate::error::Result;
use crate::models::{Homework, ReviewStatus};
use crate::store::StatusStore;

/// Decide whether `homework` carries a status worth announcing.
///
/// First sight of a homework is always announced; afterwards only an actual
/// status transition produces a message. Records missing a name or status
/// are logged and skipped. An unrecognized status fails before the store is
/// touched, so a later known status for the same homework still announces.
pub fn detect_change(homework: &Homework, store: &mut StatusStore) -> Result<Option<String>> {
    let Some(name) = homework.homework_name.as_deref().filter(|n| !n.is_empty()) else {
        log::warn!("Homework entry has no name; skipping");
        return Ok(None);
    };
    let Some(status) = homework.status.as_deref().filter(|s| !s.is_empty()) else {
        log::warn!("Homework \"{name}\" has no status; skipping");
        return Ok(None);
    };

    if store.get(name) == Some(status) {
        log::debug!("No new status for \"{name}\"");
        return Ok(None);
    }

    let verdict = status.parse::<ReviewStatus>()?.verdict();
    store.record(name, status);

    Ok(Some(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    )))
}
