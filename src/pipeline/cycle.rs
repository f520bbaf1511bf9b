// src/pipeline/cycle.rs

//! One poll-process cycle.

use crate::error::Result;
use crate::pipeline::{check_response, detect_change};
use crate::services::{StatusClient, TelegramBot};
use crate::store::StatusStore;

/// Counters for one cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Homework records the API returned
    pub records: usize,
    /// Notification messages produced
    pub messages: usize,
}

/// Run one cycle: fetch, validate, detect changes, notify.
///
/// The first cycle-level failure (fetch, shape, unknown status) propagates
/// to the caller; delivery failures are swallowed inside [`TelegramBot`].
pub async fn run_cycle(
    api: &StatusClient,
    bot: &TelegramBot,
    store: &mut StatusStore,
    from_date: i64,
) -> Result<CycleOutcome> {
    let response = api.fetch(from_date).await?;
    let homeworks = check_response(&response)?;

    let mut outcome = CycleOutcome {
        records: homeworks.len(),
        ..CycleOutcome::default()
    };

    // The API lists newest first; walk oldest first so the store lands on
    // the latest status and messages go out in transition order.
    for homework in homeworks.iter().rev() {
        if let Some(message) = detect_change(homework, store)? {
            bot.notify(&message).await;
            outcome.messages += 1;
        }
    }

    Ok(outcome)
}
