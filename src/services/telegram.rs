// src/services/telegram.rs

//! Telegram message delivery.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::Result;
use crate::models::TelegramConfig;

/// Sends notifications to one fixed Telegram chat via the Bot API.
pub struct TelegramBot {
    api_base: String,
    token: String,
    chat_id: String,
    client: Client,
}

impl TelegramBot {
    /// Create a new bot bound to the configured chat.
    pub fn new(config: &TelegramConfig, token: &str, chat_id: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            client,
        })
    }

    /// Deliver `text` to the configured chat.
    ///
    /// Delivery failures are logged and swallowed; a lost notification must
    /// never stop the poll loop.
    pub async fn notify(&self, text: &str) {
        match self.send(text).await {
            Ok(()) => log::info!("Sent message \"{text}\""),
            Err(error) => log::error!("Failed to send message: {error}"),
        }
    }

    async fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        self.client
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
