//! Process-level gateway configuration.
//!
//! Everything here resolves before the first request: the credential, the
//! endpoint base URL, the model routing table and the HTTP timeout. A missing
//! credential fails construction, not dispatch.

use crate::gateway::models::{self, ModelId};
use crate::{Error, Result};
use std::env;
use std::time::Duration;

/// Environment variable holding the Groq API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default completion endpoint (OpenAI-compatible surface).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const TIMEOUT_ENV: &str = "WRITEKIT_HTTP_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Resolved configuration for a [`ModelGateway`](crate::gateway::ModelGateway).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub base_url: String,
    /// Model plain-text operations route to unless overridden per call.
    pub text_model: ModelId,
    /// Model image operations route to. Requires multimodal message structure.
    pub vision_model: ModelId,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Build a configuration with an explicit credential and default routing.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: ModelId::new(models::TEXT_MODEL),
            vision_model: ModelId::new(models::VISION_MODEL),
            timeout: default_timeout(),
        }
    }

    /// Read the credential from `GROQ_API_KEY`. Absence or an empty value is
    /// a configuration error; nothing downstream can work without it.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "{API_KEY_ENV} not found in the environment; export your Groq API key before constructing the gateway"
                ))
            })?;
        Ok(Self::new(api_key))
    }

    /// Normalize and set the endpoint base URL. Trailing slashes are dropped
    /// so path joins stay predictable.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
    }
}

fn default_timeout() -> Duration {
    // Env-overridable; completions on large transcripts can run long.
    let secs = env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_uses_default_routing() {
        let config = GatewayConfig::new("gsk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.text_model.as_str(), models::TEXT_MODEL);
        assert_eq!(config.vision_model.as_str(), models::VISION_MODEL);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let mut config = GatewayConfig::new("gsk-test");
        config.set_base_url("http://127.0.0.1:9090/");
        assert_eq!(config.base_url, "http://127.0.0.1:9090");
    }
}
