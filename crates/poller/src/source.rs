//! Review API client.
//!
//! One GET per call, no retries. The caller's fixed poll interval is the only
//! resilience mechanism.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use homework_common::error::BotError;
use homework_common::types::PollCursor;

/// Anything that can return the raw homework status answer for a time window.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch(&self, from_date: PollCursor) -> Result<Value, BotError>;
}

/// Client for the homework review API.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, BotError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: PollCursor) -> Result<Value, BotError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Review API request failed"))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "Review API returned non-200 status");
            return Err(BotError::NonSuccessStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to read review API body"))?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Review API body is not valid JSON");
            BotError::Decode(e)
        })
    }
}
