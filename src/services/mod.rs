// src/services/mod.rs

//! External collaborators of the posting pipeline.
//!
//! - `source`: retrieve the raw log document
//! - `shortlink`: shorten the day's link
//! - `publish`: post the composed message

pub mod publish;
pub mod shortlink;
pub mod source;

pub use publish::{Publisher, StatusPublisher};
pub use shortlink::{LinkShortener, Shortener};
pub use source::{OnlineSource, SourceRetriever};
