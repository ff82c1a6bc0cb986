// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Log source location
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Message composition settings
    #[serde(default)]
    pub post: PostConfig,

    /// Link shortening service settings
    #[serde(default)]
    pub shortener: ShortenerConfig,

    /// Publishing service settings
    #[serde(default)]
    pub publisher: PublisherConfig,

    /// Sent-message history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Locate the config file among the known locations.
    ///
    /// `logpost.toml` in the working directory wins over
    /// `<config dir>/logpost/config.toml`.
    pub fn locate() -> Option<PathBuf> {
        let local = PathBuf::from("logpost.toml");
        if local.exists() {
            return Some(local);
        }
        let user = dirs::config_dir()?.join("logpost").join("config.toml");
        user.exists().then_some(user)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(AppError::config("source.url is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.post.max_length == 0 {
            return Err(AppError::config("post.max_length must be > 0"));
        }
        if self.history.path.as_os_str().is_empty() {
            return Err(AppError::config("history.path is empty"));
        }
        Ok(())
    }
}

/// Where the HTML log lives.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// URL of the HTML log page
    #[serde(default)]
    pub url: String,
}

/// HTTP client settings shared by all services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Message composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostConfig {
    /// Hard character budget for the composed message
    #[serde(default = "defaults::max_length")]
    pub max_length: usize,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            max_length: defaults::max_length(),
        }
    }
}

/// Link shortening service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// Bitly API key; when absent the anonymous service is used
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint of the anonymous shortening service
    #[serde(default = "defaults::anonymous_url")]
    pub anonymous_url: String,

    /// Endpoint of the authenticated Bitly service
    #[serde(default = "defaults::bitly_url")]
    pub bitly_url: String,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            anonymous_url: defaults::anonymous_url(),
            bitly_url: defaults::bitly_url(),
        }
    }
}

/// Publishing service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Endpoint accepting the status update
    #[serde(default = "defaults::publisher_api_url")]
    pub api_url: String,

    /// Bearer token authorizing the post
    #[serde(default)]
    pub token: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::publisher_api_url(),
            token: String::new(),
        }
    }
}

/// Sent-message history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Path of the append-only history file
    #[serde(default = "defaults::history_path")]
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: defaults::history_path(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; logpost/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_length() -> usize {
        240
    }
    pub fn anonymous_url() -> String {
        "https://s.lpld.io/create".into()
    }
    pub fn bitly_url() -> String {
        "https://api-ssl.bitly.com/v4/shorten".into()
    }
    pub fn publisher_api_url() -> String {
        "https://api.twitter.com/2/tweets".into()
    }
    pub fn history_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("logpost").join("sent.log"))
            .unwrap_or_else(|| PathBuf::from("sent.log"))
    }
}
