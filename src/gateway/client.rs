//! 请求执行逻辑：补全请求的构造、发送与响应解析。
//!
//! Request construction and execution for one-shot completions.

use crate::config::GatewayConfig;
use crate::error::TransportError;
use crate::gateway::builder::GatewayBuilder;
use crate::gateway::models::ModelId;
use crate::types::Message;
use crate::{Error, Result};
use serde_json::{json, Value};
use tracing::{debug, info};
use uuid::Uuid;

/// Default sampling temperature for every operation.
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Default output-token ceiling for text dispatch.
pub const DEFAULT_MAX_TOKENS: u32 = 8192;

/// Output-token ceiling for vision dispatch. Descriptive output runs much
/// shorter than generative text.
pub const VISION_MAX_TOKENS: u32 = 1024;

/// Effort level sent to reasoning-capable models.
const REASONING_EFFORT: &str = "medium";

/// Fully-specified sampling parameters. Nothing partial reaches the wire;
/// every request carries the complete set.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    /// `None` when the target model sits outside the reasoning family and
    /// would reject the parameter.
    pub reasoning_effort: Option<&'static str>,
}

impl CompletionParameters {
    /// Resolve the final parameter set for a request against `model`.
    pub fn resolve(temperature: f64, max_tokens: u32, use_reasoning: bool, model: &ModelId) -> Self {
        let reasoning_effort =
            (use_reasoning && model.supports_reasoning()).then_some(REASONING_EFFORT);
        Self {
            temperature,
            max_tokens,
            top_p: 1.0,
            reasoning_effort,
        }
    }
}

/// Single point of contact with the remote completion service.
///
/// Owns the HTTP client, the credential and the model routing table.
/// Construct once at the composition root and pass by reference to every
/// feature function; cloning the gateway between tasks is not needed because
/// all dispatch methods take `&self`.
#[derive(Debug)]
pub struct ModelGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl ModelGateway {
    /// Construct from the environment. Requires `GROQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(GatewayConfig::from_env()?)
    }

    /// Start explicit construction with overrides.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    pub(crate) fn with_config(config: GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;
        Ok(Self { http, config })
    }

    /// The model plain-text dispatch routes to unless overridden per call.
    pub fn text_model(&self) -> &ModelId {
        &self.config.text_model
    }

    /// The model vision dispatch routes to.
    pub fn vision_model(&self) -> &ModelId {
        &self.config.vision_model
    }

    /// Begin a text completion for `messages`. Defaults are fully specified;
    /// the builder only overrides them.
    pub fn dispatch(&self, messages: Vec<Message>) -> DispatchRequest<'_> {
        DispatchRequest::new(self, messages)
    }

    /// Begin a vision completion: a prompt plus an image reference, routed to
    /// the vision-capable model with the multimodal message structure it
    /// requires.
    pub fn dispatch_vision(
        &self,
        prompt: impl Into<String>,
        image_url: impl Into<String>,
    ) -> VisionRequest<'_> {
        VisionRequest::new(self, prompt.into(), image_url.into())
    }

    /// POST one fully-specified completion request and pull the complete
    /// message content out of the first choice.
    async fn execute(
        &self,
        model: &ModelId,
        messages: &[Message],
        params: &CompletionParameters,
    ) -> Result<String> {
        let client_request_id = Uuid::new_v4().to_string();
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = build_request_body(model, messages, params);

        debug!(
            client_request_id = client_request_id.as_str(),
            model = model.as_str(),
            message_count = messages.len(),
            "dispatching completion request"
        );

        let start = std::time::Instant::now();
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            info!(
                http_status = status,
                client_request_id = client_request_id.as_str(),
                model = model.as_str(),
                duration_ms = start.elapsed().as_millis() as u64,
                "completion request failed"
            );
            return Err(Error::Remote { status, message });
        }

        let payload: Value = resp.json().await?;
        let content = payload
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or(Error::MissingContent)?;

        info!(
            http_status = status,
            client_request_id = client_request_id.as_str(),
            model = model.as_str(),
            duration_ms = start.elapsed().as_millis() as u64,
            content_chars = content.len(),
            "completion request succeeded"
        );
        Ok(content)
    }
}

/// Builder for one text completion.
#[must_use = "call send() to execute the request"]
pub struct DispatchRequest<'a> {
    gateway: &'a ModelGateway,
    messages: Vec<Message>,
    model: Option<ModelId>,
    temperature: f64,
    max_tokens: u32,
    use_reasoning: bool,
}

impl<'a> DispatchRequest<'a> {
    fn new(gateway: &'a ModelGateway, messages: Vec<Message>) -> Self {
        Self {
            gateway,
            messages,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            use_reasoning: true,
        }
    }

    /// Route to a specific model instead of the text default.
    pub fn model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Control whether capable models receive the reasoning-effort hint.
    /// On by default; never attached to models outside the reasoning family.
    pub fn reasoning(mut self, enable: bool) -> Self {
        self.use_reasoning = enable;
        self
    }

    /// Execute synchronously and return the complete message content.
    pub async fn send(self) -> Result<String> {
        let model = self
            .model
            .unwrap_or_else(|| self.gateway.text_model().clone());
        let params = CompletionParameters::resolve(
            self.temperature,
            self.max_tokens,
            self.use_reasoning,
            &model,
        );
        self.gateway.execute(&model, &self.messages, &params).await
    }
}

/// Builder for one vision completion.
///
/// Kept separate from [`DispatchRequest`] because the message body is
/// structurally different: typed parts instead of a plain string, and the
/// reasoning hint never applies to the vision family.
#[must_use = "call send() to execute the request"]
pub struct VisionRequest<'a> {
    gateway: &'a ModelGateway,
    prompt: String,
    image_url: String,
    model: Option<ModelId>,
    temperature: f64,
    max_tokens: u32,
}

impl<'a> VisionRequest<'a> {
    fn new(gateway: &'a ModelGateway, prompt: String, image_url: String) -> Self {
        Self {
            gateway,
            prompt,
            image_url,
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: VISION_MAX_TOKENS,
        }
    }

    /// Route to a specific model instead of the vision default.
    pub fn model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub async fn send(self) -> Result<String> {
        let model = self
            .model
            .unwrap_or_else(|| self.gateway.vision_model().clone());
        let messages = vec![Message::user_with_image(self.prompt, self.image_url)];
        let params =
            CompletionParameters::resolve(self.temperature, self.max_tokens, false, &model);
        self.gateway.execute(&model, &messages, &params).await
    }
}

/// Assemble the OpenAI-compatible request body. Every field is explicit,
/// including `stream: false` and `stop: null`, so request logs diff cleanly.
fn build_request_body(model: &ModelId, messages: &[Message], params: &CompletionParameters) -> Value {
    let mut body = json!({
        "model": model.as_str(),
        "messages": messages,
        "temperature": params.temperature,
        "max_completion_tokens": params.max_tokens,
        "top_p": params.top_p,
        "stream": false,
        "stop": null,
    });
    if let Some(effort) = params.reasoning_effort {
        body["reasoning_effort"] = json!(effort);
    }
    body
}
