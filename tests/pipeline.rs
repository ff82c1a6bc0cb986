//! End-to-end posting pipeline tests with injected collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tempfile::TempDir;

use logpost::config::Config;
use logpost::content::ExtractError;
use logpost::error::AppError;
use logpost::history::History;
use logpost::pipeline::{PostContext, run_post};
use logpost::services::publish::{PublishError, Publisher};
use logpost::services::shortlink::{ShortenError, Shortener};
use logpost::services::source::{SourceError, SourceRetriever};

const LOG: &str = "\
<h2>Day 1: October 16, 2019, Wednesday</h2>\
<h3>Today's Progress</h3>\
<p>Built the day section parser.</p>\
<p>Wired the extraction into the posting pipeline.</p>\
<h3>Link(s)</h3>\
<ol><li><a href=\"https://example.com/long/path\">Example</a></li></ol>\
<h2>Day 2: October 17, 2019, Thursday</h2>\
<h3>Today's Progress</h3>\
<p>Second day, no links yet.</p>\
<h3>Link(s)</h3>\
<ol></ol>";

const SHORT_LINK: &str = "https://s.example/abc";

struct FixedSource;

#[async_trait]
impl SourceRetriever for FixedSource {
    async fn retrieve(&self, _location: &str) -> Result<String, SourceError> {
        Ok(LOG.to_string())
    }
}

struct FixedShortener;

#[async_trait]
impl Shortener for FixedShortener {
    async fn shorten(&self, _long_url: &str) -> Result<String, ShortenError> {
        Ok(SHORT_LINK.to_string())
    }
}

/// Shortener that must not be reached.
struct UnusableShortener;

#[async_trait]
impl Shortener for UnusableShortener {
    async fn shorten(&self, long_url: &str) -> Result<String, ShortenError> {
        Err(ShortenError::Request {
            url: long_url.to_string(),
            message: "should not be called".to_string(),
        })
    }
}

#[derive(Default)]
struct CountingPublisher {
    calls: AtomicUsize,
}

impl CountingPublisher {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Publisher for CountingPublisher {
    async fn publish(&self, _message: &str) -> Result<(), PublishError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.source.url = "https://example.com/log".to_string();
    config
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn publishes_composed_message_and_records_it() {
    let tmp = TempDir::new().unwrap();
    let history = History::new(tmp.path().join("sent.log"));
    let publisher = CountingPublisher::default();
    let ctx = PostContext {
        retriever: &FixedSource,
        shortener: &FixedShortener,
        publisher: &publisher,
        history: &history,
    };

    let outcome = run_post(&test_config(), &ctx, date(2019, 10, 16), false)
        .await
        .unwrap();

    assert!(outcome.published);
    assert_eq!(
        outcome.message,
        format!(
            "1/#100DaysOfCode Built the day section parser.\n\n\
             Wired the extraction into the posting pipeline.\n\n{SHORT_LINK}"
        )
    );
    assert!(outcome.message.chars().count() <= 240);
    assert_eq!(publisher.calls(), 1);
    assert!(history.contains(&outcome.message).unwrap());
}

#[tokio::test]
async fn second_run_is_rejected_without_publishing() {
    let tmp = TempDir::new().unwrap();
    let history = History::new(tmp.path().join("sent.log"));
    let publisher = CountingPublisher::default();
    let ctx = PostContext {
        retriever: &FixedSource,
        shortener: &FixedShortener,
        publisher: &publisher,
        history: &history,
    };
    let config = test_config();

    run_post(&config, &ctx, date(2019, 10, 16), false)
        .await
        .unwrap();
    let second = run_post(&config, &ctx, date(2019, 10, 16), false).await;

    assert!(matches!(second, Err(AppError::DuplicateContent)));
    assert_eq!(publisher.calls(), 1);
}

#[tokio::test]
async fn dry_run_prints_without_side_effects() {
    let tmp = TempDir::new().unwrap();
    let history = History::new(tmp.path().join("sent.log"));
    let publisher = CountingPublisher::default();
    let ctx = PostContext {
        retriever: &FixedSource,
        shortener: &FixedShortener,
        publisher: &publisher,
        history: &history,
    };

    let outcome = run_post(&test_config(), &ctx, date(2019, 10, 16), true)
        .await
        .unwrap();

    assert!(!outcome.published);
    assert_eq!(publisher.calls(), 0);
    assert!(!history.contains(&outcome.message).unwrap());
}

#[tokio::test]
async fn day_without_link_skips_shortener_and_ends_with_separator() {
    let tmp = TempDir::new().unwrap();
    let history = History::new(tmp.path().join("sent.log"));
    let publisher = CountingPublisher::default();
    let ctx = PostContext {
        retriever: &FixedSource,
        shortener: &UnusableShortener,
        publisher: &publisher,
        history: &history,
    };

    let outcome = run_post(&test_config(), &ctx, date(2019, 10, 17), false)
        .await
        .unwrap();

    assert_eq!(
        outcome.message,
        "2/#100DaysOfCode Second day, no links yet.\n\n"
    );
    assert_eq!(publisher.calls(), 1);
}

#[tokio::test]
async fn unknown_day_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let history = History::new(tmp.path().join("sent.log"));
    let publisher = CountingPublisher::default();
    let ctx = PostContext {
        retriever: &FixedSource,
        shortener: &FixedShortener,
        publisher: &publisher,
        history: &history,
    };

    let result = run_post(&test_config(), &ctx, date(2019, 10, 18), false).await;

    assert!(matches!(
        result,
        Err(AppError::Extract(ExtractError::DayNotFound(_)))
    ));
    assert_eq!(publisher.calls(), 0);
}

#[tokio::test]
async fn shortener_failure_aborts_the_run() {
    let tmp = TempDir::new().unwrap();
    let history = History::new(tmp.path().join("sent.log"));
    let publisher = CountingPublisher::default();
    let ctx = PostContext {
        retriever: &FixedSource,
        shortener: &UnusableShortener,
        publisher: &publisher,
        history: &history,
    };

    // Day 1 carries a link, so the failing shortener is reached.
    let result = run_post(&test_config(), &ctx, date(2019, 10, 16), false).await;

    assert!(matches!(result, Err(AppError::Shorten(_))));
    assert_eq!(publisher.calls(), 0);
}
