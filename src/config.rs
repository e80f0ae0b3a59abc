use std::time::Duration;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_API_URL: &str = "https://keyauth.win/api/seller/";
const DEFAULT_KEY_MASK: &str = "Corvus-****-****-***";
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub discord_bot_token: String,

    pub seller_key: String,
    pub api_url: Url,
    pub api_timeout: Duration,

    pub key_mask: String,
    pub command_prefix: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `DISCORD_BOT_TOKEN` and `KEYAUTH_SELLER_KEY` are mandatory and have no default;
    /// everything else falls back to a sensible value. Empty variables are treated as
    /// absent.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration using `lookup` to resolve variable names.
    ///
    /// Split out of `from_env` so the parsing rules can be exercised without touching
    /// the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let api_url = var("KEYAUTH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(api_url.trim()).map_err(|e| ConfigError::InvalidEnvVar {
            name: "KEYAUTH_API_URL".to_string(),
            reason: e.to_string(),
        })?;

        let api_timeout = match var("API_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "API_TIMEOUT_SECS".to_string(),
                    reason: format!("'{}' is not a positive number of seconds", value),
                })?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            seller_key: required("KEYAUTH_SELLER_KEY")?,
            api_url,
            api_timeout: Duration::from_secs(api_timeout),
            key_mask: var("LICENSE_KEY_MASK").unwrap_or_else(|| DEFAULT_KEY_MASK.to_string()),
            command_prefix: var("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }
}
