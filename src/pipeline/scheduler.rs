// src/pipeline/scheduler.rs

//! Poll loop scheduling and failure containment.

use std::time::Duration;

use chrono::Utc;

use crate::error::Result;
use crate::pipeline::cycle::{run_cycle, CycleOutcome};
use crate::services::{StatusClient, TelegramBot};
use crate::store::StatusStore;

/// Owns the poll cadence, the status memory, the cursor and the failure
/// boundary around each cycle.
pub struct Scheduler {
    api: StatusClient,
    bot: TelegramBot,
    store: StatusStore,
    interval: Duration,
    from_date: i64,
}

impl Scheduler {
    /// Create a scheduler; the cursor starts at "now".
    pub fn new(api: StatusClient, bot: TelegramBot, interval: Duration) -> Self {
        Self {
            api,
            bot,
            store: StatusStore::new(),
            interval,
            from_date: Utc::now().timestamp(),
        }
    }

    /// Current poll cursor (unix seconds).
    pub fn cursor(&self) -> i64 {
        self.from_date
    }

    /// Run one cycle and advance the cursor.
    ///
    /// The cursor moves to "now" whether the cycle succeeded or not, so a
    /// persistently failing endpoint is never asked for an ever-growing
    /// window. Errors propagate to the caller.
    pub async fn run_once(&mut self) -> Result<CycleOutcome> {
        let result = run_cycle(&self.api, &self.bot, &mut self.store, self.from_date).await;
        self.from_date = Utc::now().timestamp();
        result
    }

    /// Run one contained cycle: any failure is logged and discarded.
    pub async fn step(&mut self) {
        match self.run_once().await {
            Ok(outcome) => {
                log::debug!(
                    "Cycle finished cleanly: {} records, {} messages, {} homeworks tracked",
                    outcome.records,
                    outcome.messages,
                    self.store.len()
                );
            }
            Err(error) => {
                log::error!("Cycle failed: {error}");
            }
        }
    }

    /// Poll forever. Only process termination stops the loop.
    pub async fn run(mut self) {
        loop {
            self.step().await;
            tokio::time::sleep(self.interval).await;
        }
    }
}
