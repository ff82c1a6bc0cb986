// src/content/compose.rs

//! Composing the outgoing message from the extracted fields.

use super::error::ComposeError;

/// Hashtag suffix of the day-counter preamble.
const PREAMBLE_TAG: &str = "#100DaysOfCode";

/// Build the day-counter preamble, e.g. "77/#100DaysOfCode" for day 77.
pub fn make_preamble(day_number: u32) -> String {
    format!("{day_number}/{PREAMBLE_TAG}")
}

/// Assemble the full message from preamble, body and link.
///
/// The separating whitespace is emitted verbatim even when body or link
/// are empty; the length budgeting relies on this exact shape.
pub fn make_message(preamble: &str, body: &str, link: &str) -> String {
    format!("{preamble} {body}\n\n{link}")
}

/// Character budget left for the body once preamble, separators and link
/// are accounted for.
///
/// Negative when the fixed parts alone exceed the total budget, which the
/// joiner then reports as an error.
pub fn available_body_length(preamble: &str, link: &str, max_total: usize) -> i64 {
    max_total as i64 - char_len(&make_message(preamble, "", link)) as i64
}

/// Join paragraphs in order without exceeding `max_len` chars.
///
/// The first paragraph must fit on its own; partial truncation of it is
/// not an option. Appending stops at the first paragraph that would push
/// the total past the limit, so the body never has gaps in the narrative.
pub fn join_within_limit(
    paragraphs: &[String],
    max_len: i64,
    separator: &str,
) -> Result<String, ComposeError> {
    if max_len < 0 {
        return Err(ComposeError::NegativeLimit(max_len));
    }
    let Some((first, rest)) = paragraphs.split_first() else {
        return Err(ComposeError::NoInput);
    };

    let first_len = char_len(first);
    if first_len as i64 > max_len {
        return Err(ComposeError::FirstItemTooLong {
            length: first_len,
            limit: max_len,
        });
    }

    let mut joined = first.clone();
    let mut total = first_len;
    let separator_len = char_len(separator);
    for paragraph in rest {
        let candidate = total + separator_len + char_len(paragraph);
        if candidate as i64 > max_len {
            break;
        }
        joined.push_str(separator);
        joined.push_str(paragraph);
        total = candidate;
    }
    Ok(joined)
}

/// Message lengths are counted in chars, not bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}
