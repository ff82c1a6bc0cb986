// src/error.rs

//! Unified error handling for the logpost application.

use thiserror::Error;

use crate::content::{ComposeError, ExtractError};
use crate::services::publish::PublishError;
use crate::services::shortlink::ShortenError;
use crate::services::source::SourceError;

/// Result type alias for logpost operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client setup failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Log content retrieval failed
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Day content could not be located or extracted
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Message composition failed
    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    /// Link shortening failed
    #[error("Shortener error: {0}")]
    Shorten(#[from] ShortenError),

    /// Publishing the message failed
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    /// The composed message was published before
    #[error("A post with this content was already published")]
    DuplicateContent,
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
