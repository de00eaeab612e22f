use serde::Deserialize;
use std::collections::BTreeMap;

/// User agent evaluated against robots.txt when none is configured
pub const DEFAULT_ROBOTS_AGENT: &str = "*";

/// Main configuration structure for Page-Pulse
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub robots: RobotsConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
}

/// Robots.txt evaluation settings
#[derive(Debug, Clone, Deserialize)]
pub struct RobotsConfig {
    /// User agent whose robots.txt group decides permission
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_ROBOTS_AGENT.to_string()
}

/// Sentiment scoring settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentConfig {
    /// Word scores that override or extend the built-in lexicon
    #[serde(default)]
    pub extras: BTreeMap<String, i32>,
}
