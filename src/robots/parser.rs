//! Robots.txt parser implementation
//!
//! Rule matching is delegated to the robotstxt crate (a port of Google's
//! matcher); this type only holds the fetched body.

use super::{RobotsParser, RobotsRules};
use robotstxt::DefaultMatcher;

/// A fetched robots.txt body
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    content: String,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// An empty or whitespace-only body allows everything.
    ///
    /// # Arguments
    ///
    /// * `url` - An absolute URL or a path (e.g., "/page.html")
    /// * `user_agent` - The user agent; `"*"` matches only wildcard groups
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}

impl RobotsRules for ParsedRobots {
    fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        ParsedRobots::is_allowed(self, url, user_agent)
    }
}

/// Parser used by default: wraps the body in [`ParsedRobots`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRobotsParser;

impl RobotsParser for StandardRobotsParser {
    type Rules = ParsedRobots;

    fn parse(&self, body: &str) -> ParsedRobots {
        ParsedRobots::from_content(body)
    }
}
