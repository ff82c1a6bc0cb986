// src/services/shortlink.rs

//! Shortening the day's link before it goes into the message.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ShortenerConfig;

/// Errors raised while shortening a link.
#[derive(Error, Debug)]
pub enum ShortenError {
    /// The shortening request never completed
    #[error("shortening request for '{url}' failed: {message}")]
    Request { url: String, message: String },

    /// The shortening service responded with an error status
    #[error("shortener responded with status {status} for '{url}'")]
    BadStatus { url: String, status: u16 },

    /// The shortening service response had an unexpected shape
    #[error("unreadable shortener response: {0}")]
    Decode(String),
}

/// Anything that can shorten a long URL.
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Shorten `long_url`, returning the short URL.
    async fn shorten(&self, long_url: &str) -> Result<String, ShortenError>;
}

/// Response of the anonymous shortening service.
#[derive(Debug, Deserialize)]
struct AnonymousResponse {
    short: String,
}

/// Response of the authenticated Bitly v4 endpoint.
#[derive(Debug, Deserialize)]
struct BitlyResponse {
    link: String,
}

/// Link shortener backed by an HTTP shortening service.
///
/// With an API key configured the authenticated Bitly endpoint is used,
/// otherwise the anonymous service. Both take a JSON body carrying the
/// long URL and answer with a JSON object whose short-link key differs
/// per service.
pub struct LinkShortener {
    client: reqwest::Client,
    config: ShortenerConfig,
}

impl LinkShortener {
    /// Create a shortener using the given HTTP client and settings.
    pub fn new(client: reqwest::Client, config: ShortenerConfig) -> Self {
        Self { client, config }
    }

    async fn post(
        &self,
        endpoint: &str,
        long_url: &str,
        api_key: Option<&str>,
    ) -> Result<reqwest::Response, ShortenError> {
        let mut request = self
            .client
            .post(endpoint)
            .json(&serde_json::json!({ "long_url": long_url }));
        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| ShortenError::Request {
            url: long_url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::BadStatus {
                url: long_url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Shortener for LinkShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        match self.config.api_key.as_deref() {
            Some(key) => {
                let response = self.post(&self.config.bitly_url, long_url, Some(key)).await?;
                let body: BitlyResponse = response
                    .json()
                    .await
                    .map_err(|e| ShortenError::Decode(e.to_string()))?;
                Ok(body.link)
            }
            None => {
                let response = self.post(&self.config.anonymous_url, long_url, None).await?;
                let body: AnonymousResponse = response
                    .json()
                    .await
                    .map_err(|e| ShortenError::Decode(e.to_string()))?;
                Ok(body.short)
            }
        }
    }
}
