// src/services/source.rs

//! Retrieving the raw log document from its source.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors raised while retrieving log content.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The location string is not a fetchable URL
    #[error("'{0}' is not a valid log location")]
    InvalidLocation(String),

    /// The connection to the source failed
    #[error("request to '{url}' failed: {message}")]
    Connection { url: String, message: String },

    /// The source responded with an error status
    #[error("response from '{url}' failed with status {status}")]
    BadStatus { url: String, status: u16 },
}

/// Anything that can produce the raw log document for a location.
///
/// The pipeline depends only on this contract; tests inject fakes.
#[async_trait]
pub trait SourceRetriever: Send + Sync {
    /// Retrieve the document body for the given location identifier.
    async fn retrieve(&self, location: &str) -> Result<String, SourceError>;
}

/// Log source fetched over HTTP(S).
pub struct OnlineSource {
    client: reqwest::Client,
}

impl OnlineSource {
    /// Create an online source using the given HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Validate that a location string is a fetchable http(s) URL.
    fn validate(location: &str) -> Result<Url, SourceError> {
        let url =
            Url::parse(location).map_err(|_| SourceError::InvalidLocation(location.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceError::InvalidLocation(location.to_string()));
        }
        Ok(url)
    }
}

#[async_trait]
impl SourceRetriever for OnlineSource {
    async fn retrieve(&self, location: &str) -> Result<String, SourceError> {
        let url = Self::validate(location)?;

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| SourceError::Connection {
                    url: location.to_string(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus {
                url: location.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| SourceError::Connection {
            url: location.to_string(),
            message: e.to_string(),
        })
    }
}
