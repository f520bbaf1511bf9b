// src/config.rs

//! Credential loading.
//!
//! Tokens and the chat id are read from the environment at startup, never
//! from the config file. Absence of any of them is fatal before the first
//! poll; it is the only condition that terminates the process.

use std::env;

use crate::error::{AppError, Result};

/// Environment variable holding the review-status API token.
pub const API_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Secrets and chat routing pulled from the environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth token for the review-status API
    pub api_token: String,

    /// Telegram bot token
    pub bot_token: String,

    /// Destination chat identifier
    pub chat_id: String,
}

impl Credentials {
    /// Read all required values from the process environment.
    ///
    /// Each missing or blank variable is logged individually before the
    /// error returns, so a single run reports the full list of gaps.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = require(&lookup, API_TOKEN_VAR);
        let bot_token = require(&lookup, BOT_TOKEN_VAR);
        let chat_id = require(&lookup, CHAT_ID_VAR);

        match (api_token, bot_token, chat_id) {
            (Some(api_token), Some(bot_token), Some(chat_id)) => Ok(Self {
                api_token,
                bot_token,
                chat_id,
            }),
            _ => Err(AppError::config(
                "required environment variables are missing",
            )),
        }
    }
}

fn require(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            log::error!("Required environment variable {name} is not set");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn all_present_ok() {
        let creds = Credentials::from_lookup(env_of(&[
            (API_TOKEN_VAR, "api"),
            (BOT_TOKEN_VAR, "bot"),
            (CHAT_ID_VAR, "42"),
        ]))
        .unwrap();
        assert_eq!(creds.api_token, "api");
        assert_eq!(creds.bot_token, "bot");
        assert_eq!(creds.chat_id, "42");
    }

    #[test]
    fn missing_one_fails() {
        let result = Credentials::from_lookup(env_of(&[
            (API_TOKEN_VAR, "api"),
            (CHAT_ID_VAR, "42"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn blank_counts_as_missing() {
        let result = Credentials::from_lookup(env_of(&[
            (API_TOKEN_VAR, "api"),
            (BOT_TOKEN_VAR, "   "),
            (CHAT_ID_VAR, "42"),
        ]));
        assert!(result.is_err());
    }
}
