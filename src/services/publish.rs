// src/services/publish.rs

//! Publishing the composed message to the social platform.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::PublisherConfig;

/// Errors raised while publishing a message.
#[derive(Error, Debug)]
pub enum PublishError {
    /// No token is configured
    #[error("no publisher token configured")]
    MissingCredentials,

    /// The platform rejected the credentials
    #[error("authentication with the publishing service failed (status {0})")]
    Auth(u16),

    /// The platform answered with a non-success status
    #[error("publishing failed with status {0}")]
    Api(u16),

    /// The publishing request never completed
    #[error("publishing request failed: {0}")]
    Transport(String),
}

/// Anything that can publish a finished message.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish the message; succeeds at most once per call.
    async fn publish(&self, message: &str) -> Result<(), PublishError>;
}

/// Publisher posting the message as a JSON status update with a bearer
/// token.
pub struct StatusPublisher {
    client: reqwest::Client,
    config: PublisherConfig,
}

impl StatusPublisher {
    /// Create a publisher using the given HTTP client and credentials.
    pub fn new(client: reqwest::Client, config: PublisherConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Publisher for StatusPublisher {
    async fn publish(&self, message: &str) -> Result<(), PublishError> {
        if self.config.token.trim().is_empty() {
            return Err(PublishError::MissingCredentials);
        }

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({ "text": message }))
            .send()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            401 | 403 => Err(PublishError::Auth(status.as_u16())),
            code => Err(PublishError::Api(code)),
        }
    }
}
