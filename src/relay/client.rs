//! HTTP client for the mail relay endpoint
//!
//! Contact messages go out as a single JSON POST. Application submissions
//! are currently stubbed: they resolve after a fixed delay without
//! transmitting a payload, until an applicant-tracking integration exists.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::traits::RelayClient;
use crate::config::FormsConfig;
use crate::error::SubmitError;
use crate::state::{ApplicationSubmission, ContactSubmission};

/// Default mail relay endpoint
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/send-email";

/// Environment variable overriding the relay endpoint
const ENDPOINT_ENV: &str = "ALPHASEAM_RELAY_ENDPOINT";

/// Timeout for a single relay request
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Simulated latency of the stubbed application submission
const APPLICATION_STUB_LATENCY: Duration = Duration::from_secs(2);

/// Client delivering submissions over HTTP
pub struct HttpRelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRelayClient {
    /// Create a client against the configured endpoint, preferring the
    /// environment override, then the default.
    pub fn new() -> Result<Self> {
        let endpoint =
            std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::build(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client against an explicit endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::build(endpoint.into(), DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client from user configuration. The environment override
    /// still wins over the configured endpoint.
    pub fn from_config(config: &FormsConfig) -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV).ok().unwrap_or_else(|| {
            config
                .relay_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
        });
        let timeout = config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        Self::build(endpoint, timeout)
    }

    fn build(endpoint: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send_contact(&self, message: &ContactSubmission) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status.as_u16()))
        }
    }

    /// Placeholder until a real applicant-tracking endpoint exists:
    /// resolves successfully after a fixed delay, no payload transmitted.
    async fn send_application(
        &self,
        application: &ApplicationSubmission,
    ) -> Result<(), SubmitError> {
        tracing::info!(position = %application.position, "simulating application delivery");
        tokio::time::sleep(APPLICATION_STUB_LATENCY).await;
        Ok(())
    }
}
