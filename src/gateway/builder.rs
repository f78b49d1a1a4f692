//! Explicit gateway construction with overrides.

use crate::config::GatewayConfig;
use crate::gateway::client::ModelGateway;
use crate::gateway::models::ModelId;
use crate::Result;
use std::time::Duration;

/// Builder for [`ModelGateway`].
///
/// Every knob is optional. With no overrides this is equivalent to
/// [`ModelGateway::from_env`]: the credential comes from `GROQ_API_KEY` and
/// routing uses the default model table.
#[derive(Debug, Default)]
pub struct GatewayBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    text_model: Option<ModelId>,
    vision_model: Option<ModelId>,
    timeout: Option<Duration>,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the credential directly instead of reading the environment.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the completion endpoint base URL.
    ///
    /// This is primarily for testing with mock servers. In production the
    /// default Groq endpoint is the one you want.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Change the model plain-text operations route to.
    pub fn text_model(mut self, model: impl Into<ModelId>) -> Self {
        self.text_model = Some(model.into());
        self
    }

    /// Change the model image operations route to.
    pub fn vision_model(mut self, model: impl Into<ModelId>) -> Self {
        self.vision_model = Some(model.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ModelGateway> {
        let mut config = match self.api_key {
            Some(api_key) => GatewayConfig::new(api_key),
            None => GatewayConfig::from_env()?,
        };
        if let Some(base_url) = self.base_url {
            config.set_base_url(base_url);
        }
        if let Some(model) = self.text_model {
            config.text_model = model;
        }
        if let Some(model) = self.vision_model {
            config.vision_model = model;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        ModelGateway::with_config(config)
    }
}
