// src/services/status_api.rs

//! Review-status API client.
//!
//! Wraps the authenticated GET to the status endpoint and classifies
//! transport and HTTP failures. The body is returned as raw JSON; shape
//! validation happens in the pipeline.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::ApiConfig;

/// Client for the homework review-status endpoint.
pub struct StatusClient {
    endpoint: String,
    token: String,
    client: Client,
}

impl StatusClient {
    /// Create a new client with the given configuration and OAuth token.
    pub fn new(config: &ApiConfig, token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            token: token.to_string(),
            client,
        })
    }

    /// Fetch review statuses updated since `from_date` (unix seconds).
    ///
    /// A non-success HTTP code fails without reading the body. Success is
    /// silent; every failure is logged here before the error propagates.
    pub async fn fetch(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                self.log_transport_failure(&e);
                AppError::from(e)
            })?;

        let code = response.status();
        if !code.is_success() {
            log::error!(
                "Status endpoint {} unavailable: HTTP {}",
                self.endpoint,
                code
            );
            return Err(AppError::Endpoint { code });
        }

        let body = response.text().await.map_err(|e| {
            self.log_transport_failure(&e);
            AppError::from(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Status endpoint {} returned invalid JSON: {e}", self.endpoint);
            AppError::from(e)
        })
    }

    fn log_transport_failure(&self, error: &reqwest::Error) {
        if error.is_timeout() {
            log::error!("Request to {} timed out", self.endpoint);
        } else if error.is_connect() {
            log::error!("Could not connect to {}: {error}", self.endpoint);
        } else {
            log::error!("Request to {} failed: {error}", self.endpoint);
        }
    }
}
