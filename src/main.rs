// src/main.rs

//! hwring: homework review-status notifier daemon.
//!
//! Polls the review-status API on a fixed interval and announces status
//! changes to one Telegram chat.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hwring::config::Credentials;
use hwring::models::Config;
use hwring::pipeline::Scheduler;
use hwring::services::{StatusClient, TelegramBot};

/// hwring - Homework Review Status Notifier
#[derive(Parser, Debug)]
#[command(name = "hwring", version, about = "Homework review-status notifier")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point.
#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    if let Err(error) = config.validate() {
        log::error!("Cannot start: {error}");
        return ExitCode::FAILURE;
    }

    // Missing credentials are the only fatal path; everything after startup
    // is contained to its cycle.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(error) => {
            log::error!("Cannot start: {error}");
            return ExitCode::FAILURE;
        }
    };

    let api = match StatusClient::new(&config.api, &credentials.api_token) {
        Ok(api) => api,
        Err(error) => {
            log::error!("Cannot start: {error}");
            return ExitCode::FAILURE;
        }
    };
    let bot = match TelegramBot::new(&config.telegram, &credentials.bot_token, &credentials.chat_id)
    {
        Ok(bot) => bot,
        Err(error) => {
            log::error!("Cannot start: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut scheduler = Scheduler::new(api, bot, config.poll.interval());

    if cli.once {
        return match scheduler.run_once().await {
            Ok(outcome) => {
                log::info!(
                    "Cycle finished: {} records, {} messages",
                    outcome.records,
                    outcome.messages
                );
                ExitCode::SUCCESS
            }
            Err(error) => {
                log::error!("Cycle failed: {error}");
                ExitCode::FAILURE
            }
        };
    }

    log::info!(
        "hwring starting: polling every {}s",
        config.poll.interval_secs
    );
    scheduler.run().await;

    ExitCode::SUCCESS
}
