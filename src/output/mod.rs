//! Output module for the human-readable page report
//!
//! The report goes to any `io::Write` sink; the binary passes stdout.

mod report;

pub use report::{write_content, write_report, write_sentiment};

/// Printed when robots.txt disallows the target
pub const BLOCKED_MESSAGE: &str = "Crawling is blocked by robots.txt";

/// Printed before the page fetch starts
pub const ALLOWED_MESSAGE: &str = "Crawling allowed. Fetching page...";
