use tracing::info;

use crate::error::CobraError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Generator settings, read once at startup and frozen afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Empty when neither `API_KEY` nor `GEMINI_API_KEY` is set.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self, CobraError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CobraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get("API_KEY").or_else(|| get("GEMINI_API_KEY")).unwrap_or_default();
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = get("GEMINI_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) | Err(_) => {
                    return Err(CobraError::Config(format!(
                        "GEMINI_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    )))
                }
                Ok(secs) => secs,
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        };
        info!(
            "Generator config: model={}, base_url={}, timeout={}s, api_key_set={}",
            config.model,
            config.base_url,
            config.timeout_secs,
            config.has_api_key()
        );
        Ok(config)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
