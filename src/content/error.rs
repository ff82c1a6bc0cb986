// src/content/error.rs

//! Error kinds for content navigation, extraction and composition.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while locating and extracting a day's content.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No day heading matched the requested date
    #[error("no day heading found for {0}")]
    DayNotFound(NaiveDate),

    /// No subsection with the given title before the next day heading
    #[error("no '{0}' subsection found under the day heading")]
    SubsectionNotFound(String),

    /// A day heading does not follow the expected format
    #[error("malformed day heading '{heading}': {reason}")]
    HeadingFormat { heading: String, reason: String },

    /// The progress heading is not followed by any paragraph
    #[error("no paragraphs found after the progress heading")]
    NoParagraphs,

    /// Progress paragraphs exist but none carries text
    #[error("all paragraphs after the progress heading are empty")]
    EmptyParagraphs,
}

impl ExtractError {
    /// Create a heading format error.
    pub fn heading_format(heading: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HeadingFormat {
            heading: heading.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while composing the message body.
///
/// These indicate a caller bug or log content that cannot be represented
/// within the length budget; they fail the run instead of truncating.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// An empty paragraph sequence was passed to the joiner
    #[error("cannot join an empty paragraph sequence")]
    NoInput,

    /// The computed body budget is negative
    #[error("negative length limit: {0}")]
    NegativeLimit(i64),

    /// The first paragraph alone exceeds the length limit
    #[error("the first paragraph ({length} chars) exceeds the limit of {limit}")]
    FirstItemTooLong { length: usize, limit: i64 },
}
