//! Grammar and spelling check with rule-level explanations.

use crate::gateway::ModelGateway;
use crate::types::{Message, NormalizedResult};
use serde::{Deserialize, Serialize};

const PROMPT_HEADER: &str = "You are a professional editor and an expert grammar tutor. Check the following text for grammar and spelling errors, factual errors, word choice issues, and suggest better word combinations.";

// The JSON example is the only lever available to steer the output format;
// the endpoint offers no schema enforcement for this flow.
const PROMPT_FORMAT: &str = r#"Provide your response in the following JSON format:

```json
{
  "corrected_text": "The corrected version of the text with ONLY grammatical errors fixed. DO NOT completely paraphrase the text.",
  "corrections": [
    {
      "error": "The original error text (the exact part of the sentence that is incorrect)",
      "suggestion": "The corrected version of that specific part",
      "type": "The type of error (e.g., spelling, grammar, punctuation, subject-verb agreement, verb tense, noun form, article usage, factual error, word choice, word combination)",
      "explanation": "A brief, clear explanation of why this specific part is an error and how the suggestion fixes it.",
      "grammar_rule": {
        "rule_name": "A concise name for the grammar rule that was violated",
        "description": "A detailed but simple, beginner-friendly explanation of the grammar rule.",
        "correct_examples": ["Example 1", "Example 2"],
        "incorrect_examples": ["Incorrect example 1", "Incorrect example 2"]
      }
    }
  ]
}
```

IMPORTANT INSTRUCTIONS:
1. For the "corrected_text", maintain the original text structure and only fix actual errors. DO NOT completely rewrite or paraphrase the text.
2. Only suggest complete paraphrasing when the correction type is specifically "word combination".
3. For grammatical errors, make minimal changes necessary to fix the specific issue.
4. Identify actual errors only - don't suggest stylistic changes unless they're grammatically incorrect.
5. For each correction, the "error" field must contain the exact text from the original that contains the error.

If there are no errors in the original text, return the original text as "corrected_text" and an empty array for "corrections".
Ensure the JSON is well-formed."#;

/// The grammar rule behind a correction, with teaching examples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarRule {
    #[serde(default)]
    pub rule_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub correct_examples: Vec<String>,
    #[serde(default)]
    pub incorrect_examples: Vec<String>,
}

/// One identified issue: the exact offending fragment, its fix and why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub grammar_rule: GrammarRule,
}

/// Guaranteed-shape grammar report. `corrected_text` is always present, even
/// when the model refused to produce structured output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarReport {
    pub original_text: String,
    pub corrected_text: String,
    pub corrections: Vec<Correction>,
}

/// What the model is asked to return. Absent fields fill with defaults so a
/// sparse-but-valid payload still normalizes.
#[derive(Debug, Default, Deserialize)]
struct GrammarPayload {
    #[serde(default)]
    corrected_text: Option<String>,
    #[serde(default)]
    corrections: Vec<Correction>,
}

fn build_prompt(text: &str) -> String {
    format!("{PROMPT_HEADER}\n\nOriginal text: {text}\n\n{PROMPT_FORMAT}")
}

/// Check `text` for errors and return a correction report.
///
/// Parse failures are not reported as errors: the raw model output stands in
/// as the corrected text with an empty correction list, so the caller always
/// has something to render.
pub async fn check_grammar(gateway: &ModelGateway, text: &str) -> NormalizedResult<GrammarReport> {
    let messages = vec![Message::user(build_prompt(text))];
    let response = match gateway.dispatch(messages).send().await {
        Ok(response) => response,
        Err(err) => return NormalizedResult::failed(err),
    };

    match super::structured_payload::<GrammarPayload>("grammar", &response) {
        Some(payload) => NormalizedResult::Report(GrammarReport {
            original_text: text.to_string(),
            corrected_text: payload.corrected_text.unwrap_or_else(|| text.to_string()),
            corrections: payload.corrections,
        }),
        None => NormalizedResult::Report(GrammarReport {
            original_text: text.to_string(),
            corrected_text: response,
            corrections: Vec::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_text_between_header_and_format_block() {
        let prompt = build_prompt("She dont like apples.");
        assert!(prompt.starts_with(PROMPT_HEADER));
        assert!(prompt.contains("Original text: She dont like apples."));
        assert!(prompt.contains("Ensure the JSON is well-formed."));
    }

    #[test]
    fn sparse_payload_fills_defaults() {
        let payload: GrammarPayload =
            serde_json::from_str(r#"{"corrections": [{"error": "dont"}]}"#).unwrap();
        assert!(payload.corrected_text.is_none());
        assert_eq!(payload.corrections.len(), 1);
        assert_eq!(payload.corrections[0].error, "dont");
        assert!(payload.corrections[0].suggestion.is_empty());
        assert!(payload.corrections[0].grammar_rule.rule_name.is_empty());
    }
}
