// src/content/extract.rs

//! Field extraction from a located day section.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use super::error::ExtractError;
use super::navigate::{DaySection, element_text};

/// Title of the subsection listing the day's links.
const LINKS_HEADING: &str = "Link(s)";

/// Title of the subsection holding the day's progress report.
const PROGRESS_HEADING: &str = "Today's Progress";

/// Captures the day counter between the literal "Day " and the colon.
static DAY_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Day\s+(\d+):").expect("hard-coded regex is valid"));

/// Extract the day number from a day heading.
pub fn day_number(heading_text: &str) -> Result<u32, ExtractError> {
    let captures = DAY_NUMBER_RE
        .captures(heading_text.trim())
        .ok_or_else(|| ExtractError::heading_format(heading_text, "no day number found"))?;
    captures[1]
        .parse()
        .map_err(|_| ExtractError::heading_format(heading_text, "day number out of range"))
}

/// Extract the first link listed under the day's "Link(s)" subsection.
///
/// A day without links is a normal state, so every failure mode (missing
/// subsection, missing list, empty list, missing anchor, empty `href`)
/// collapses into `None`.
pub fn first_link(section: &DaySection<'_>) -> Option<String> {
    let heading_index = section.subsection(LINKS_HEADING).ok()?;
    let list = section
        .after(heading_index)
        .iter()
        .take_while(|el| !is_heading(el))
        .find(|el| el.value().name() == "ol")?;
    let item = child_element(*list, "li")?;
    let anchor = descendant_element(item, "a")?;
    let href = anchor.value().attr("href")?.trim();
    if href.is_empty() {
        None
    } else {
        Some(href.to_string())
    }
}

/// Extract the day's progress paragraphs in document order.
///
/// Only the contiguous run of `<p>` siblings immediately after the
/// "Today's Progress" heading counts; the run ends at the first
/// non-paragraph sibling. Paragraphs that are empty after trimming are
/// dropped afterwards, which keeps "no paragraphs at all" and "only
/// empty paragraphs" as distinct failures.
pub fn progress_paragraphs(section: &DaySection<'_>) -> Result<Vec<String>, ExtractError> {
    let heading_index = section.subsection(PROGRESS_HEADING)?;

    let collected: Vec<String> = section
        .after(heading_index)
        .iter()
        .take_while(|el| el.value().name() == "p")
        .map(|el| element_text(*el).trim().to_string())
        .collect();

    if collected.is_empty() {
        return Err(ExtractError::NoParagraphs);
    }

    let paragraphs: Vec<String> = collected.into_iter().filter(|p| !p.is_empty()).collect();
    if paragraphs.is_empty() {
        return Err(ExtractError::EmptyParagraphs);
    }
    Ok(paragraphs)
}

fn is_heading(element: &ElementRef<'_>) -> bool {
    matches!(element.value().name(), "h2" | "h3")
}

fn child_element<'a>(parent: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}

fn descendant_element<'a>(parent: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    parent
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}
