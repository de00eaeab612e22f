//! Configuration module for Page-Pulse
//!
//! Configuration is optional. Without a file every run uses
//! [`Config::default`]; with one, the TOML is parsed and validated here.
//!
//! # Example
//!
//! ```no_run
//! use page_pulse::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pulse.toml")).unwrap();
//! println!("Robots user agent: {}", config.robots.user_agent);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{Config, RobotsConfig, SentimentConfig, DEFAULT_ROBOTS_AGENT};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
