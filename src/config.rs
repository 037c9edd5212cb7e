//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which belongs to the conversation.

use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Longest accepted birthday window.
const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of the upcoming-birthday window in days, today included (default: 7)
    pub birthday_window_days: u32,

    /// Prompt printed before each input line (default: "Enter a command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window, 1-366 (default: 7)
    /// - `ASSISTANT_PROMPT`: input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if !(1..=MAX_BIRTHDAY_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
