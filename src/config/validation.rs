use crate::config::types::{Config, RobotsConfig, SentimentConfig};
use crate::sentiment::{MAX_WORD_SCORE, MIN_WORD_SCORE};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_robots_config(&config.robots)?;
    validate_sentiment_config(&config.sentiment)?;
    Ok(())
}

/// Validates robots configuration
fn validate_robots_config(config: &RobotsConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "robots user-agent cannot be empty".to_string(),
        ));
    }

    if config
        .user_agent
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(ConfigError::Validation(format!(
            "robots user-agent must not contain whitespace, got '{}'",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates sentiment extras
fn validate_sentiment_config(config: &SentimentConfig) -> Result<(), ConfigError> {
    for (word, score) in &config.extras {
        validate_extra_word(word)?;

        if !(MIN_WORD_SCORE..=MAX_WORD_SCORE).contains(score) {
            return Err(ConfigError::Validation(format!(
                "score for '{}' must be between {} and {}, got {}",
                word, MIN_WORD_SCORE, MAX_WORD_SCORE, score
            )));
        }
    }

    Ok(())
}

/// Extras are matched against lowercased single tokens
fn validate_extra_word(word: &str) -> Result<(), ConfigError> {
    if word.is_empty() {
        return Err(ConfigError::Validation(
            "sentiment extras cannot contain an empty word".to_string(),
        ));
    }

    if word.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "sentiment extra '{}' must be a single word",
            word
        )));
    }

    if word.chars().any(char::is_uppercase) {
        return Err(ConfigError::Validation(format!(
            "sentiment extra '{}' must be lowercase",
            word
        )));
    }

    Ok(())
}
