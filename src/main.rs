//! Page-Pulse main entry point
//!
//! This is the command-line interface for the Page-Pulse page scanner.

use anyhow::Context;
use clap::Parser;
use page_pulse::config::{load_config_with_hash, Config};
use page_pulse::{ScanError, ScanOutcome, Scanner};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Page-Pulse: fetch one page and score the sentiment of its text
///
/// Page-Pulse checks robots.txt, fetches the page, extracts its title,
/// meta description, headings and paragraphs, and prints a lexicon-based
/// sentiment score for each.
#[derive(Parser, Debug)]
#[command(name = "page-pulse")]
#[command(version)]
#[command(about = "Fetch one page and score the sentiment of its text", long_about = None)]
struct Cli {
    /// The page to fetch
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors in the log
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let Some(raw_url) = cli.url.as_deref() else {
        eprintln!("Please provide a URL to crawl.");
        eprintln!("Example: page-pulse https://example.com");
        return ExitCode::FAILURE;
    };

    match run(raw_url, cli.config.as_deref()).await {
        Ok(ScanOutcome::Blocked) => {
            tracing::info!("Run ended: blocked by robots.txt");
            ExitCode::SUCCESS
        }
        Ok(ScanOutcome::Completed(_)) => {
            tracing::info!("Run completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the report on stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_pulse=warn,error"),
            1 => EnvFilter::new("page_pulse=info,warn"),
            2 => EnvFilter::new("page_pulse=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads configuration, parses the target and runs the scanner
async fn run(raw_url: &str, config_path: Option<&Path>) -> anyhow::Result<ScanOutcome> {
    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let target = Url::parse(raw_url).with_context(|| format!("Invalid URL '{}'", raw_url))?;

    let scanner = Scanner::from_config(&config)?;
    let mut stdout = std::io::stdout();
    Ok(scanner.run(&target, &mut stdout).await?)
}

/// Prints a fatal error to stderr
///
/// Page fetch failures get the reason and, when the server answered, the
/// status code on a separate line.
fn report_error(err: &anyhow::Error) {
    if let Some(ScanError::Fetch(fetch)) = err.downcast_ref::<ScanError>() {
        eprintln!("Failed to fetch page: {}", fetch);
        if let Some(status) = fetch.status() {
            eprintln!("Status code: {}", status);
        }
        return;
    }

    eprintln!("Error: {:#}", err);
}
