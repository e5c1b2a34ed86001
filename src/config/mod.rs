//! Configuration loaded from the environment (with `.env` support).

use crate::error::{Result, SkycastError};

/// Configuration for the two upstream providers.
///
/// API keys are required at startup; base URLs exist so tests can point the
/// clients at a local mock server.
#[derive(Debug, Clone, Default)]
pub struct SkycastConfig {
    openweather_api_key: Option<String>,
    gemini_api_key: Option<String>,
    openweather_base_url: Option<String>,
    gemini_base_url: Option<String>,
}

impl SkycastConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (`OPENWEATHER_API_KEY`,
    /// `GEMINI_API_KEY`, optional `*_BASE_URL` overrides).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        Self {
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            openweather_base_url: std::env::var("OPENWEATHER_BASE_URL").ok(),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").ok(),
        }
    }

    pub fn with_openweather_api_key(mut self, key: impl Into<String>) -> Self {
        self.openweather_api_key = Some(key.into());
        self
    }

    pub fn with_gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    pub fn with_openweather_base_url(mut self, url: impl Into<String>) -> Self {
        self.openweather_base_url = Some(url.into());
        self
    }

    pub fn with_gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = Some(url.into());
        self
    }

    /// The OpenWeather API key, or a configuration error when absent.
    pub fn openweather_api_key(&self) -> Result<&str> {
        self.openweather_api_key
            .as_deref()
            .ok_or_else(|| SkycastError::Configuration("Missing OPENWEATHER_API_KEY".into()))
    }

    /// The Gemini API key, or a configuration error when absent.
    pub fn gemini_api_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .ok_or_else(|| SkycastError::Configuration("Missing GEMINI_API_KEY".into()))
    }

    pub fn openweather_base_url(&self) -> Option<&str> {
        self.openweather_base_url.as_deref()
    }

    pub fn gemini_base_url(&self) -> Option<&str> {
        self.gemini_base_url.as_deref()
    }
}
