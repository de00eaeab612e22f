//! Robots.txt handling module
//!
//! Derives the site's robots.txt URL from the target, fetches it once and
//! evaluates the target against it. Every failure along the way is treated
//! as permission granted.

mod parser;

pub use parser::{ParsedRobots, StandardRobotsParser};

use crate::fetcher::fetch_text;
use crate::ScanError;
use reqwest::Client;
use url::Url;

/// Rule evaluation over a parsed robots.txt
pub trait RobotsRules {
    /// Returns whether `user_agent` may fetch `url`
    fn is_allowed(&self, url: &str, user_agent: &str) -> bool;
}

/// Turns a fetched robots.txt body into rules
pub trait RobotsParser {
    type Rules: RobotsRules;

    fn parse(&self, body: &str) -> Self::Rules;
}

/// Derives `<scheme>://<host>[:port]/robots.txt` for a target URL
///
/// # Examples
///
/// ```
/// use page_pulse::robots::robots_url;
/// use url::Url;
///
/// let target = Url::parse("https://example.com/news/today?page=2#top").unwrap();
/// assert_eq!(robots_url(&target).unwrap().as_str(), "https://example.com/robots.txt");
/// ```
pub fn robots_url(target: &Url) -> Result<Url, url::ParseError> {
    target.join("/robots.txt")
}

/// Fetches robots.txt for the target's site and parses it
///
/// Fails when the target has no robots URL, on network failure and on a
/// non-2xx status.
async fn fetch_rules<R, F>(client: &Client, target: &Url, parse: F) -> Result<R, ScanError>
where
    F: FnOnce(&str) -> R,
{
    let robots = robots_url(target)?;
    tracing::debug!("Fetching robots.txt from {}", robots);

    let body = fetch_text(client, robots.as_str()).await?;
    Ok(parse(&body))
}

/// Checks whether the target may be fetched, failing open
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `target` - The page the run wants to fetch
/// * `user_agent` - The robots.txt group to evaluate (`"*"` by default)
///
/// # Returns
///
/// `false` only when robots.txt was fetched and explicitly disallows the
/// target; `true` in every other case.
pub async fn can_fetch(client: &Client, target: &Url, user_agent: &str) -> bool {
    can_fetch_with(client, target, user_agent, ParsedRobots::from_content).await
}

/// [`can_fetch`] with a caller-supplied robots.txt parser
pub async fn can_fetch_with<R, F>(client: &Client, target: &Url, user_agent: &str, parse: F) -> bool
where
    R: RobotsRules,
    F: FnOnce(&str) -> R,
{
    match fetch_rules(client, target, parse).await {
        Ok(rules) => {
            let allowed = rules.is_allowed(target.as_str(), user_agent);
            tracing::info!(
                "robots.txt {} {} for user agent '{}'",
                if allowed { "allows" } else { "disallows" },
                target,
                user_agent
            );
            allowed
        }
        Err(e) => {
            tracing::debug!("robots.txt unavailable ({}), allowing {}", e, target);
            true
        }
    }
}
