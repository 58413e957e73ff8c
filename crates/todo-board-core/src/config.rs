//! Board Configuration
//!
//! Parsed from the JSON file the hosting service generates for the API
//! (`amplifyconfiguration.json`). Only the keys the board uses are read.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::ConfigError;

/// Seconds between two poll ticks unless the config says otherwise
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Longest delay a DOM timer accepts; larger values wrap to a zero delay.
pub const MAX_POLL_INTERVAL_MILLIS: u32 = i32::MAX as u32;

/// Longest poll interval in whole seconds
pub const MAX_POLL_INTERVAL_SECS: u64 = MAX_POLL_INTERVAL_MILLIS as u64 / 1000;

/// How the remote API authenticates requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AuthType {
    #[serde(rename = "API_KEY")]
    ApiKey,
    #[serde(rename = "AMAZON_COGNITO_USER_POOLS")]
    UserPool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    #[serde(rename = "aws_appsync_graphqlEndpoint")]
    pub endpoint: String,
    #[serde(rename = "aws_appsync_authenticationType")]
    pub auth_type: AuthType,
    #[serde(rename = "aws_appsync_apiKey", default)]
    pub api_key: Option<String>,
    #[serde(rename = "aws_user_pools_web_client_id", default)]
    pub client_id: Option<String>,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl BoardConfig {
    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        match self.auth_type {
            AuthType::ApiKey if self.api_key.as_deref().map_or(true, str::is_empty) => {
                return Err(ConfigError::MissingApiKey);
            }
            AuthType::UserPool if self.client_id.as_deref().map_or(true, str::is_empty) => {
                return Err(ConfigError::MissingClientId);
            }
            _ => {}
        }
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.poll_interval_secs > MAX_POLL_INTERVAL_SECS {
            return Err(ConfigError::PollIntervalTooLong {
                secs: self.poll_interval_secs,
                max: MAX_POLL_INTERVAL_SECS,
            });
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Poll interval for DOM timers, clamped to what they accept
    pub fn poll_interval_millis(&self) -> u32 {
        self.poll_interval_secs
            .checked_mul(1000)
            .and_then(|millis| u32::try_from(millis).ok())
            .map_or(MAX_POLL_INTERVAL_MILLIS, |millis| millis.min(MAX_POLL_INTERVAL_MILLIS))
    }
}
