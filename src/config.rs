use std::{env, time::Duration};

use crate::error::{PlannerError, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_WEATHER_LATENCY: Duration = Duration::from_millis(1000);

/// Process-wide planner configuration.
///
/// Built once at startup and handed to [`crate::GenerationPipeline::new`].
/// A missing API key is not an error: it selects fallback-only generation.
#[derive(Clone)]
pub struct PlannerConfig {
    api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub weather_latency: Duration,
}

impl std::fmt::Debug for PlannerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("weather_latency", &self.weather_latency)
            .finish()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            weather_latency: DEFAULT_WEATHER_LATENCY,
        }
    }
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment.
    ///
    /// Recognised variables: `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`,
    /// `VIBEPACK_TIMEOUT_SECS` and `VIBEPACK_WEATHER_LATENCY_MS`. Call
    /// `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default().with_api_key(env::var("GEMINI_API_KEY").ok());

        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(raw) = env::var("VIBEPACK_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_number("VIBEPACK_TIMEOUT_SECS", &raw)?);
        }
        if let Ok(raw) = env::var("VIBEPACK_WEATHER_LATENCY_MS") {
            config.weather_latency =
                Duration::from_millis(parse_number("VIBEPACK_WEATHER_LATENCY_MS", &raw)?);
        }

        Ok(config)
    }

    /// Blank keys are treated as absent.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_weather_latency(mut self, latency: Duration) -> Self {
        self.weather_latency = latency;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_number(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|err| PlannerError::Config(format!("{name} must be a whole number: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_absent() {
        let config = PlannerConfig::new().with_api_key(Some("   ".to_string()));
        assert!(!config.has_credential());
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let config = PlannerConfig::new().with_api_key(Some(" abc123 \n".to_string()));
        assert_eq!(config.api_key(), Some("abc123"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = PlannerConfig::new().with_api_key(Some("secret-key".to_string()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        let err = parse_number("VIBEPACK_TIMEOUT_SECS", "soon").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(parse_number("X", " 15 ").unwrap(), 15);
    }
}
