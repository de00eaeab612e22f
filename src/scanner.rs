//! Run coordination
//!
//! A run is strictly sequential: robots check, page fetch, extraction,
//! scoring, report. The only branches are the two early exits (robots
//! denial and fetch failure).

use crate::config::Config;
use crate::extract::{extract, ExtractedContent};
use crate::fetcher::{build_http_client, fetch_text};
use crate::output::{write_report, ALLOWED_MESSAGE, BLOCKED_MESSAGE};
use crate::robots::{can_fetch_with, RobotsParser, StandardRobotsParser};
use crate::sentiment::{analyze, LexiconScorer, SentimentReport, SentimentScorer, TextGroups};
use crate::Result;
use reqwest::Client;
use std::io::Write;
use url::Url;

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct PageReport {
    pub content: ExtractedContent,
    pub sentiment: SentimentReport,
}

/// How a run ended when it did not fail
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    /// robots.txt disallowed the target; the page was not fetched
    Blocked,
    /// The page was fetched, extracted, scored and reported
    Completed(Box<PageReport>),
}

/// Single-page scanner
///
/// `S` scores the text groups; `P` turns the fetched robots.txt body into
/// rules.
pub struct Scanner<S, P = StandardRobotsParser> {
    client: Client,
    user_agent: String,
    scorer: S,
    robots: P,
}

impl Scanner<LexiconScorer> {
    /// Builds a scanner from configuration, using the bundled lexicon
    pub fn from_config(config: &Config) -> Result<Self> {
        let scorer = LexiconScorer::with_extras(
            config
                .sentiment
                .extras
                .iter()
                .map(|(word, score)| (word.as_str(), *score)),
        );
        Ok(Self::new(
            build_http_client()?,
            config.robots.user_agent.clone(),
            scorer,
        ))
    }
}

impl<S: SentimentScorer> Scanner<S> {
    pub fn new(client: Client, user_agent: impl Into<String>, scorer: S) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
            scorer,
            robots: StandardRobotsParser,
        }
    }
}

impl<S, P> Scanner<S, P> {
    /// Replaces the robots.txt parser
    pub fn with_robots_parser<Q: RobotsParser>(self, robots: Q) -> Scanner<S, Q> {
        Scanner {
            client: self.client,
            user_agent: self.user_agent,
            scorer: self.scorer,
            robots,
        }
    }
}

impl<S: SentimentScorer, P: RobotsParser> Scanner<S, P> {
    /// Runs the full pipeline against `target`, writing to `out`
    ///
    /// # Returns
    ///
    /// * `Ok(ScanOutcome::Blocked)` - robots.txt disallowed the target
    /// * `Ok(ScanOutcome::Completed(_))` - Report written
    /// * `Err(ScanError::Fetch)` - The page fetch failed; nothing was extracted
    /// * `Err(ScanError::Io)` - Writing to `out` failed
    pub async fn run<W: Write>(&self, target: &Url, out: &mut W) -> Result<ScanOutcome> {
        let allowed = can_fetch_with(&self.client, target, &self.user_agent, |body| {
            self.robots.parse(body)
        })
        .await;
        if !allowed {
            writeln!(out, "{}", BLOCKED_MESSAGE)?;
            return Ok(ScanOutcome::Blocked);
        }

        writeln!(out, "{}", ALLOWED_MESSAGE)?;
        let html = fetch_text(&self.client, target.as_str()).await?;

        let report = self.analyze_page(&html);
        tracing::info!(
            "Extracted {} headings and {} paragraphs from {}",
            report.content.headings().count(),
            report.content.paragraphs.len(),
            target
        );

        write_report(out, &report.content, &report.sentiment)?;
        Ok(ScanOutcome::Completed(Box::new(report)))
    }

    /// Extracts and scores an already-fetched document
    pub fn analyze_page(&self, html: &str) -> PageReport {
        let content = extract(html);
        let sentiment = analyze(&self.scorer, &TextGroups::from_content(&content));
        PageReport { content, sentiment }
    }
}
