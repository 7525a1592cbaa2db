//! Environment-driven settings for the CLI.

use std::time::Duration;

use thiserror::Error;
use ymarket::{MarketClient, MarketError};

const DEFAULT_TIMEOUT_SECS: &str = "20";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Settings read from `YMARKET_*` environment variables.
#[derive(Clone)]
pub struct Settings {
    pub oauth_token: String,
    pub oauth_client_id: String,
    pub campaign_id: Option<i64>,
    pub api_endpoint: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("oauth_token", &"[redacted]")
            .field("oauth_client_id", &self.oauth_client_id)
            .field("campaign_id", &self.campaign_id)
            .field("api_endpoint", &self.api_endpoint)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Settings {
    /// Builds an API client from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<MarketClient, MarketError> {
        let mut builder = MarketClient::builder()
            .oauth(&self.oauth_token, &self.oauth_client_id)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(endpoint) = &self.api_endpoint {
            builder = builder.api_endpoint(endpoint);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }

    /// Picks the campaign from the command line, falling back to the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when neither is set.
    pub fn campaign(&self, from_args: Option<i64>) -> Result<i64, ConfigError> {
        from_args
            .or(self.campaign_id)
            .ok_or_else(|| ConfigError::MissingEnvVar("YMARKET_CAMPAIGN_ID".to_string()))
    }
}

/// Load settings from the process environment.
///
/// Expects `.env` to have been loaded already by the caller.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_settings() -> Result<Settings, ConfigError> {
    build_settings(|key| std::env::var(key))
}

/// Parses settings through `lookup` so tests never touch the real environment.
fn build_settings<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let oauth_token = require("YMARKET_OAUTH_TOKEN")?;
    let oauth_client_id = require("YMARKET_OAUTH_CLIENT_ID")?;

    let campaign_id = lookup("YMARKET_CAMPAIGN_ID")
        .ok()
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|e| invalid("YMARKET_CAMPAIGN_ID", e.to_string()))
        })
        .transpose()?;

    let timeout_secs = or_default("YMARKET_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
        .parse::<u64>()
        .map_err(|e| invalid("YMARKET_TIMEOUT_SECS", e.to_string()))?;
    if timeout_secs == 0 {
        return Err(invalid(
            "YMARKET_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(Settings {
        oauth_token,
        oauth_client_id,
        campaign_id,
        api_endpoint: lookup("YMARKET_API_ENDPOINT").ok(),
        user_agent: lookup("YMARKET_USER_AGENT").ok(),
        timeout_secs,
        log_level: or_default("YMARKET_LOG_LEVEL", DEFAULT_LOG_LEVEL),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
