//! 结构化提取模块：从自由格式的模型输出中宽容地提取 JSON。
//!
//! # Structured Extraction
//!
//! Completion text is not guaranteed to be bare JSON. Models wrap payloads in
//! markdown code fences, with or without a language tag, and sometimes prepend
//! prose. Extraction is an ordered chain of stages tried until one yields
//! valid JSON:
//!
//! 1. the interior of a fenced block tagged `json`
//! 2. the interior of any fenced block
//! 3. the raw text itself
//!
//! All stages failing is a [`MalformedResponse`](crate::Error::MalformedResponse)
//! error. Structured features treat that as recoverable and substitute their
//! documented fallback content instead of reporting a failure.

use crate::{Error, Result};
use regex::Regex;
use serde_json::Value;

// Non-greedy so the first fence wins; [\s\S] because payloads span lines.
static TAGGED_FENCE: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("fence pattern"));
static ANY_FENCE: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"```\s*([\s\S]*?)\s*```").expect("fence pattern"));

/// One stage of the extraction chain, in trial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStage {
    /// Interior of a ```json fenced block.
    TaggedFence,
    /// Interior of any fenced block.
    AnyFence,
    /// The whole text, trimmed.
    RawText,
}

impl ExtractStage {
    /// All stages, in the order they are tried.
    pub const CHAIN: [ExtractStage; 3] = [
        ExtractStage::TaggedFence,
        ExtractStage::AnyFence,
        ExtractStage::RawText,
    ];

    /// The candidate JSON source this stage sees in `text`, if any.
    pub fn candidate<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            ExtractStage::TaggedFence => TAGGED_FENCE
                .captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str()),
            ExtractStage::AnyFence => ANY_FENCE
                .captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str()),
            ExtractStage::RawText => Some(text.trim()),
        }
    }
}

/// Extract a JSON value from completion text.
///
/// Tries each [`ExtractStage`] in order and returns the first candidate that
/// parses. Errors only when every stage is exhausted.
pub fn extract_json(text: &str) -> Result<Value> {
    let mut reason = String::from("no JSON candidate found");
    for stage in ExtractStage::CHAIN {
        let Some(candidate) = stage.candidate(text) else {
            continue;
        };
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => return Ok(value),
            Err(err) => reason = err.to_string(),
        }
    }
    Err(Error::MalformedResponse { reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_from_tagged_fence() {
        let text = "Here is the analysis:\n```json\n{\"score\": 42}\n```\nHope that helps.";
        assert_eq!(extract_json(text).unwrap(), json!({"score": 42}));
    }

    #[test]
    fn extracts_from_untagged_fence() {
        let text = "```\n{\"ok\": true}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn parses_bare_json() {
        assert_eq!(
            extract_json("  {\"a\": [1, 2]}  ").unwrap(),
            json!({"a": [1, 2]})
        );
    }

    #[test]
    fn multiline_payload_survives_fence() {
        let text = "```json\n{\n  \"corrected_text\": \"Hi\",\n  \"corrections\": []\n}\n```";
        let value = extract_json(text).unwrap();
        assert_eq!(value["corrected_text"], "Hi");
    }

    #[test]
    fn first_fence_wins_when_several_present() {
        let text = "```json\n{\"first\": 1}\n```\ntext\n```json\n{\"second\": 2}\n```";
        assert_eq!(extract_json(text).unwrap(), json!({"first": 1}));
    }

    #[test]
    fn falls_through_when_tagged_interior_is_not_json() {
        // The json-tagged fence holds junk, so the chain moves on and the
        // untagged stage picks up the first plain fence instead.
        let text = "```\n{\"usable\": true}\n```\nretry below\n```json\nnot json at all\n```";
        assert_eq!(
            ExtractStage::TaggedFence.candidate(text),
            Some("not json at all")
        );
        assert_eq!(extract_json(text).unwrap(), json!({"usable": true}));
    }

    #[test]
    fn prose_without_json_is_malformed() {
        let err = extract_json("I'm sorry, I cannot answer that.").unwrap_err();
        assert!(err.is_malformed_response());
    }

    #[test]
    fn stage_candidates_are_independent() {
        let text = "intro ```json {\"x\":1} ``` outro";
        assert_eq!(
            ExtractStage::TaggedFence.candidate(text),
            Some("{\"x\":1}")
        );
        assert_eq!(ExtractStage::RawText.candidate(text), Some(text.trim()));
    }
}
