// src/content/mod.rs

//! Content assembly for one day's log entry.
//!
//! - `navigate`: locate the day section and its named subsections
//! - `extract`: pull day number, first link and progress paragraphs
//! - `compose`: join the extracted fields into a length-bounded message

mod compose;
mod error;
mod extract;
mod navigate;

pub use compose::{available_body_length, join_within_limit, make_message, make_preamble};
pub use error::{ComposeError, ExtractError};
pub use extract::{day_number, first_link, progress_paragraphs};
pub use navigate::{DaySection, LogDocument, parse_heading_date};
