//! Configuration management for candidate intake.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::domain::phone::{DEFAULT_PHONE_LENGTH, DEFAULT_PHONE_PREFIXES};
use crate::domain::PhonePolicy;
use crate::error::{ConfigError, ConfigResult};
use crate::validator::CandidateValidator;
use std::env;

/// Longest phone number the E.164 plan allows.
const MAX_PHONE_LENGTH: usize = 15;

/// Configuration for candidate intake.
#[derive(Debug, Clone)]
pub struct Config {
    /// Digits in a valid mobile number (default: 9)
    pub phone_length: usize,

    /// Allowed first digits of a mobile number (default: "679")
    pub phone_prefixes: String,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CANDIDATE_PHONE_LENGTH`: mobile number length, 1..=15 (default: 9)
    /// - `CANDIDATE_PHONE_PREFIXES`: allowed leading digits (default: "679")
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let phone_length = Self::parse_env_usize("CANDIDATE_PHONE_LENGTH", DEFAULT_PHONE_LENGTH)?;
        if phone_length == 0 || phone_length > MAX_PHONE_LENGTH {
            return Err(ConfigError::InvalidValue {
                var: "CANDIDATE_PHONE_LENGTH".to_string(),
                reason: format!("Must be between 1 and {}", MAX_PHONE_LENGTH),
            });
        }

        let phone_prefixes = env::var("CANDIDATE_PHONE_PREFIXES")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_PHONE_PREFIXES.to_string());
        if phone_prefixes.is_empty() || !phone_prefixes.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "CANDIDATE_PHONE_PREFIXES".to_string(),
                reason: format!("Must be a non-empty list of digits, got: {}", phone_prefixes),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            phone_length,
            phone_prefixes,
            log_level,
        })
    }

    /// Phone policy described by this configuration.
    pub fn phone_policy(&self) -> PhonePolicy {
        PhonePolicy::new(self.phone_length, &self.phone_prefixes)
    }

    /// Validator configured with [`Config::phone_policy`].
    pub fn validator(&self) -> CandidateValidator {
        CandidateValidator::new(self.phone_policy())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            phone_length: DEFAULT_PHONE_LENGTH,
            phone_prefixes: DEFAULT_PHONE_PREFIXES.to_string(),
            log_level: "info".to_string(),
        }
    }
}
