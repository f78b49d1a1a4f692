//! Model identifiers and routing roles for the Groq-hosted catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default model for plain text operations.
pub const TEXT_MODEL: &str = "openai/gpt-oss-120b";

/// Model for image operations. Requires multimodal message structure.
pub const VISION_MODEL: &str = "meta-llama/llama-4-maverick-17b-128e-instruct";

/// General-purpose alternative, selectable per call.
pub const VERSATILE_MODEL: &str = "llama-3.3-70b-versatile";

/// Identifier substring marking the reasoning-capable model family.
///
/// `reasoning_effort` is a capability flag, not a tuning knob: models outside
/// this family reject the parameter, so it is attached only on a match.
pub const REASONING_FAMILY: &str = "gpt-oss";

/// Known models with display descriptions, for pickers and CLI listings.
pub const CATALOG: [(&str, &str); 3] = [
    (TEXT_MODEL, "GPT-OSS 120B - best for text tasks"),
    (VISION_MODEL, "Llama 4 Maverick - best for image analysis"),
    (VERSATILE_MODEL, "Llama 3.3 70B - versatile general purpose"),
];

/// Identifier of a remote model variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this model accepts the `reasoning_effort` parameter.
    pub fn supports_reasoning(&self) -> bool {
        self.0.contains(REASONING_FAMILY)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasoning_support_follows_family_marker() {
        assert!(ModelId::new(TEXT_MODEL).supports_reasoning());
        assert!(ModelId::new("groq/gpt-oss-20b").supports_reasoning());
        assert!(!ModelId::new(VERSATILE_MODEL).supports_reasoning());
        assert!(!ModelId::new(VISION_MODEL).supports_reasoning());
    }

    #[test]
    fn model_id_round_trips_as_plain_string() {
        let id: ModelId = TEXT_MODEL.into();
        assert_eq!(id.to_string(), TEXT_MODEL);
        assert_eq!(serde_json::to_value(&id).unwrap(), TEXT_MODEL);
    }

    #[test]
    fn catalog_covers_both_routing_roles() {
        let ids: Vec<&str> = CATALOG.iter().map(|(id, _)| *id).collect();
        assert!(ids.contains(&TEXT_MODEL));
        assert!(ids.contains(&VISION_MODEL));
    }
}
