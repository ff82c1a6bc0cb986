// src/content/navigate.rs

//! Locating a day's section inside the parsed log document.
//!
//! The log format has no explicit nesting: a day is a flat run of sibling
//! elements delimited by `<h2>` headings, with `<h3>` subsection headings
//! in between. Navigation therefore works on a materialized list of the
//! document body's top-level children and walks it by index.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html};

use super::error::ExtractError;

/// Format of the date embedded in a day heading, e.g. "October 16, 2019".
const HEADING_DATE_FORMAT: &str = "%B %d, %Y";

/// Captures the date substring of a day heading: everything between the
/// first colon and the comma preceding the trailing weekday token.
static HEADING_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^:]*:\s*(.+),\s*[A-Za-z]+day\b").expect("hard-coded regex is valid")
});

/// Parsed log document.
pub struct LogDocument {
    html: Html,
}

impl LogDocument {
    /// Parse an HTML log document.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Materialize the document body's top-level child elements in order.
    fn body_elements(&self) -> Vec<ElementRef<'_>> {
        let body = self
            .html
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "body");

        match body {
            Some(body) => body.children().filter_map(ElementRef::wrap).collect(),
            None => Vec::new(),
        }
    }

    /// Find the day section whose heading date equals `target`.
    ///
    /// Scans all top-level `<h2>` headings in document order and returns
    /// the first match. A heading that does not follow the expected format
    /// is a hard error so that a malformed log surfaces to the operator
    /// instead of being skipped.
    pub fn day_section(&self, target: NaiveDate) -> Result<DaySection<'_>, ExtractError> {
        let elements = self.body_elements();
        for index in 0..elements.len() {
            let element = elements[index];
            if element.value().name() != "h2" {
                continue;
            }
            let heading_text = element_text(element);
            let date = parse_heading_date(&heading_text)?;
            if date == target {
                return Ok(DaySection {
                    elements,
                    start: index,
                    heading_text,
                });
            }
        }
        Err(ExtractError::DayNotFound(target))
    }
}

/// One day's flat run of sibling elements, anchored at its `<h2>` heading.
pub struct DaySection<'a> {
    elements: Vec<ElementRef<'a>>,
    start: usize,
    heading_text: String,
}

impl<'a> DaySection<'a> {
    /// Text of the day's `<h2>` heading.
    pub fn heading_text(&self) -> &str {
        &self.heading_text
    }

    /// Find the first `<h3>` subsection with exactly the given title.
    ///
    /// Walks the direct following siblings of the day heading and stops at
    /// the next `<h2>`, which delimits the next day, or at the end of the
    /// document. Returns the absolute index of the subsection heading.
    pub fn subsection(&self, title: &str) -> Result<usize, ExtractError> {
        for (offset, element) in self.elements[self.start + 1..].iter().enumerate() {
            match element.value().name() {
                "h2" => break,
                "h3" if element_text(*element) == title => return Ok(self.start + 1 + offset),
                _ => {}
            }
        }
        Err(ExtractError::SubsectionNotFound(title.to_string()))
    }

    /// Sibling elements after the given absolute index, in document order.
    pub(super) fn after(&self, index: usize) -> &[ElementRef<'a>] {
        &self.elements[index + 1..]
    }
}

/// Extract and parse the date embedded in a day heading.
///
/// Expected heading shape: `"Day 1: October 16, 2019, Wednesday"`. The
/// date substring sits between the first colon and the comma before the
/// weekday and must parse as "Month DD, YYYY".
pub fn parse_heading_date(heading_text: &str) -> Result<NaiveDate, ExtractError> {
    let captures = HEADING_DATE_RE
        .captures(heading_text.trim())
        .ok_or_else(|| ExtractError::heading_format(heading_text, "no date substring found"))?;
    let date_str = captures[1].trim();
    NaiveDate::parse_from_str(date_str, HEADING_DATE_FORMAT)
        .map_err(|e| ExtractError::heading_format(heading_text, e.to_string()))
}

/// Collect the visible text of an element.
pub(super) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
