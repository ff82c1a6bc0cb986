// src/pipeline/post.rs

//! One posting run: fetch, locate, extract, shorten, compose, publish.

use chrono::NaiveDate;

use crate::config::Config;
use crate::content::{self, LogDocument};
use crate::error::{AppError, Result};
use crate::history::History;
use crate::services::{Publisher, Shortener, SourceRetriever};

/// Separator between progress paragraphs in the message body.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Collaborators a posting run needs injected.
pub struct PostContext<'a> {
    pub retriever: &'a dyn SourceRetriever,
    pub shortener: &'a dyn Shortener,
    pub publisher: &'a dyn Publisher,
    pub history: &'a History,
}

/// Outcome of a posting run.
#[derive(Debug)]
pub struct PostOutcome {
    /// The composed message
    pub message: String,
    /// False when the run was a dry run
    pub published: bool,
}

/// Fields extracted from one day's section.
struct DayContent {
    day: u32,
    paragraphs: Vec<String>,
    link: Option<String>,
}

/// Run one full posting pipeline for the given date.
///
/// Every failure is a single attempt surfaced to the caller; nothing is
/// retried. Dry runs stop after composition and skip both the duplicate
/// check and the history record.
pub async fn run_post(
    config: &Config,
    ctx: &PostContext<'_>,
    date: NaiveDate,
    dry_run: bool,
) -> Result<PostOutcome> {
    log::info!("Fetching log from {}", config.source.url);
    let raw = ctx.retriever.retrieve(&config.source.url).await?;

    let extracted = extract_day(&raw, date)?;
    log::debug!(
        "Extracted day {} with {} paragraph(s)",
        extracted.day,
        extracted.paragraphs.len()
    );

    // A day without links is fine; the message then ends with the bare
    // separator.
    let link = match extracted.link {
        Some(long) => {
            let short = ctx.shortener.shorten(&long).await?;
            log::debug!("Shortened {} to {}", long, short);
            short
        }
        None => {
            log::info!("No link found for {}", date);
            String::new()
        }
    };

    let preamble = content::make_preamble(extracted.day);
    let budget = content::available_body_length(&preamble, &link, config.post.max_length);
    let body = content::join_within_limit(&extracted.paragraphs, budget, PARAGRAPH_SEPARATOR)?;
    let message = content::make_message(&preamble, &body, &link);

    if dry_run {
        return Ok(PostOutcome {
            message,
            published: false,
        });
    }

    if ctx.history.contains(&message)? {
        return Err(AppError::DuplicateContent);
    }
    ctx.publisher.publish(&message).await?;
    ctx.history.append(&message)?;
    log::info!(
        "Published day {} ({} chars)",
        extracted.day,
        message.chars().count()
    );

    Ok(PostOutcome {
        message,
        published: true,
    })
}

/// Locate the day's section and pull its fields out of the document.
fn extract_day(raw: &str, date: NaiveDate) -> Result<DayContent> {
    let document = LogDocument::parse(raw);
    let section = document.day_section(date)?;

    let day = content::day_number(section.heading_text())?;
    let paragraphs = content::progress_paragraphs(&section)?;
    let link = content::first_link(&section);

    Ok(DayContent {
        day,
        paragraphs,
        link,
    })
}
