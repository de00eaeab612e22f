//! Page-Pulse: a single-page content and sentiment scanner
//!
//! This crate fetches one web page (after checking robots.txt), extracts its
//! title, meta description, headings and paragraphs, and scores each text
//! group with a lexicon-based sentiment analyzer.

pub mod config;
pub mod extract;
pub mod fetcher;
pub mod output;
pub mod robots;
pub mod scanner;
pub mod sentiment;

use thiserror::Error;

/// Main error type for Page-Pulse operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single HTTP GET
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// The HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Network(source) => source.status().map(|s| s.as_u16()),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Page-Pulse operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract, ExtractedContent};
pub use robots::{can_fetch, ParsedRobots, RobotsParser, RobotsRules, StandardRobotsParser};
pub use scanner::{PageReport, ScanOutcome, Scanner};
pub use sentiment::{Label, LexiconScorer, SentimentResult, SentimentScorer};
