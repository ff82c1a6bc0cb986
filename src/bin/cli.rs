//! logpost CLI
//!
//! Builds the post for one day of the log and publishes it.

use std::path::PathBuf;

use chrono::{Duration, Local};
use clap::Parser;
use logpost::{
    config::Config,
    error::{AppError, Result},
    history::History,
    pipeline::{PostContext, run_post},
    services::{LinkShortener, OnlineSource, StatusPublisher},
    utils::http,
};

/// logpost - 100DaysOfCode log poster
#[derive(Parser, Debug)]
#[command(
    name = "logpost",
    version,
    about = "Posts one day's 100DaysOfCode log entry"
)]
struct Cli {
    /// Days to offset today's date with, can be negative
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Compose and print the message instead of publishing and recording it
    #[arg(short, long)]
    test_mode: bool,

    /// Path to the config file (default: logpost.toml, then the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.or_else(Config::locate).ok_or_else(|| {
        AppError::config("No config file found. Create logpost.toml or pass --config.")
    })?;
    let config = Config::load(&config_path)?;
    config.validate()?;
    log::info!("Loaded configuration from {}", config_path.display());

    let client = http::create_client(&config.http)?;
    let retriever = OnlineSource::new(client.clone());
    let shortener = LinkShortener::new(client.clone(), config.shortener.clone());
    let publisher = StatusPublisher::new(client, config.publisher.clone());
    let history = History::new(&config.history.path);

    let date = Local::now().date_naive() + Duration::days(cli.offset);
    log::info!("Building post for {}", date);

    let ctx = PostContext {
        retriever: &retriever,
        shortener: &shortener,
        publisher: &publisher,
        history: &history,
    };
    let outcome = run_post(&config, &ctx, date, cli.test_mode).await?;

    if outcome.published {
        log::info!(
            "Post published and recorded in {}",
            config.history.path.display()
        );
    } else {
        println!("{}", outcome.message);
    }

    Ok(())
}
