// src/history.rs

//! Append-only history of previously published messages.
//!
//! Each sent message is recorded as one line of the form
//! `<timestamp> - Sent : <single-line message>`. Lookup is substring
//! containment of the single-line message against every line, which keeps
//! the check independent of the timestamp prefix.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Append-only record of sent messages, used to prevent double-posting.
pub struct History {
    path: PathBuf,
}

impl History {
    /// Open a history at the given path. The file is created lazily on
    /// the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the given message was recorded before.
    ///
    /// A missing history file means nothing was ever sent.
    pub fn contains(&self, message: &str) -> Result<bool> {
        let needle = single_line(message);
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        Ok(content.lines().any(|line| line.contains(&needle)))
    }

    /// Record a sent message.
    pub fn append(&self, message: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} - Sent : {}\n", timestamp, single_line(message));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// History lines stay single-line for readability and lookup; newlines in
/// the message are replaced with spaces.
fn single_line(message: &str) -> String {
    message.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_contains_nothing() {
        let tmp = TempDir::new().unwrap();
        let history = History::new(tmp.path().join("sent.log"));
        assert!(!history.contains("anything").unwrap());
    }

    #[test]
    fn append_then_contains() {
        let tmp = TempDir::new().unwrap();
        let history = History::new(tmp.path().join("sent.log"));

        let message = "1/#100DaysOfCode Did things.\n\nhttps://s.example/x";
        history.append(message).unwrap();

        assert!(history.contains(message).unwrap());
        assert!(!history.contains("2/#100DaysOfCode Other day.").unwrap());
    }

    #[test]
    fn records_are_single_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sent.log");
        let history = History::new(&path);

        history.append("line one\n\nline two").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert_eq!(content.lines().count(), 1);
        assert!(content.contains(" - Sent : line one  line two"));
    }

    #[test]
    fn append_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("sent.log");
        let history = History::new(&path);

        history.append("message").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn appends_accumulate() {
        let tmp = TempDir::new().unwrap();
        let history = History::new(tmp.path().join("sent.log"));

        history.append("first").unwrap();
        history.append("second").unwrap();

        assert!(history.contains("first").unwrap());
        assert!(history.contains("second").unwrap());
    }
}
