// src/app/config.rs
//
// Application configuration, read from the environment
//
// VARIABLES:
// - CHICPICK_DB_PATH               SQLite file (default: app data dir)
// - GEMINI_API_KEY / API_KEY       classifier credential; absent disables it
// - CHICPICK_GEMINI_MODEL          model name
// - CHICPICK_GEMINI_BASE_URL       API root
// - CHICPICK_CLASSIFY_TIMEOUT_SECS request timeout in seconds

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::integrations::gemini::client::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_TIMEOUT,
};
use crate::integrations::GeminiConfig;

pub const ENV_DB_PATH: &str = "CHICPICK_DB_PATH";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_GEMINI_MODEL: &str = "CHICPICK_GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "CHICPICK_GEMINI_BASE_URL";
pub const ENV_CLASSIFY_TIMEOUT: &str = "CHICPICK_CLASSIFY_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// None means the default location under the user's data directory
    pub db_path: Option<PathBuf>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub classify_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            classify_timeout: DEFAULT_GEMINI_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any name -> value lookup.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let classify_timeout = match get(ENV_CLASSIFY_TIMEOUT) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_CLASSIFY_TIMEOUT, raw))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!("{} must be greater than zero", ENV_CLASSIFY_TIMEOUT)));
                }
                Duration::from_secs(secs)
            }
            None => defaults.classify_timeout,
        };

        Ok(Self {
            db_path: get(ENV_DB_PATH).map(PathBuf::from),
            gemini_api_key: get(ENV_GEMINI_API_KEY).or_else(|| get(ENV_API_KEY)),
            gemini_model: get(ENV_GEMINI_MODEL).unwrap_or(defaults.gemini_model),
            gemini_base_url: get(ENV_GEMINI_BASE_URL).unwrap_or(defaults.gemini_base_url),
            classify_timeout,
        })
    }

    /// Classifier settings, or None when no API key is configured
    pub fn gemini_config(&self) -> Option<GeminiConfig> {
        self.gemini_api_key.as_ref().map(|key| GeminiConfig {
            api_key: key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.trim_end_matches('/').to_string(),
            timeout: self.classify_timeout,
        })
    }
}
