//! Plagiarism and AI-generation likelihood review.

use crate::gateway::ModelGateway;
use crate::types::{Message, NormalizedResult};
use serde::{Deserialize, Serialize};

const PROMPT_HEADER: &str = r#"You are a plagiarism detection system. Given the input text, you must:

1. Check if the text is likely AI-generated or copied from online sources.
2. Compare it to your training data and common knowledge sources (e.g., Wikipedia, essays, articles).
3. Analyze for typical AI-generated patterns like:
   - Balanced paragraph structure with intro-middle-conclusion
   - Transition phrases like "In conclusion", "On the one hand...", etc.
   - Overly clean grammar without typos
   - High-level vocabulary but no personal tone
   - Generic or commonly seen ChatGPT-style answers
   - Wordy, robotic, or unnaturally perfect phrasing

Return a JSON object with the following fields:
- plagiarism_score: A number from 0 to 100 indicating the likelihood of plagiarism or AI-generation
- flagged_sentences: An array of sentences that appear to be copied or AI-generated
- feedback: Detailed explanation of why certain parts were flagged and suggestions for improvement

Here is the text to analyze:"#;

const PROMPT_FORMAT: &str = r#"Respond with ONLY a valid JSON object following this format:
```json
{
  "plagiarism_score": 78,
  "flagged_sentences": [
    "Artificial intelligence is transforming every industry in the modern world.",
    "In conclusion, technology will shape the future of education."
  ],
  "feedback": "These sentences appear overly generic and match patterns often seen in AI-generated or public content. Consider personalizing or adding specific references."
}
```"#;

/// Feedback used when the model returned JSON without a `feedback` field.
pub const DEFAULT_FEEDBACK: &str = "No issues detected in the text.";

/// Feedback used when no extraction stage produced usable JSON at all.
pub const FALLBACK_FEEDBACK: &str = "Unable to analyze text. Please try again.";

/// Guaranteed-shape plagiarism report. Every field is present even when the
/// model answered sparsely or unusably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismReport {
    pub original_text: String,
    /// Likelihood of plagiarism or AI generation, 0 to 100.
    pub plagiarism_score: f64,
    pub flagged_sentences: Vec<String>,
    pub feedback: String,
}

#[derive(Debug, Default, Deserialize)]
struct PlagiarismPayload {
    #[serde(default)]
    plagiarism_score: f64,
    #[serde(default)]
    flagged_sentences: Vec<String>,
    #[serde(default)]
    feedback: Option<String>,
}

fn build_prompt(text: &str) -> String {
    format!("{PROMPT_HEADER}\n{text}\n\n{PROMPT_FORMAT}")
}

/// Review `text` for likely plagiarism or AI generation.
///
/// Missing payload fields fill with neutral defaults. A completely
/// unstructured reply degrades to a zero-score report that asks the user to
/// retry, not to an error.
pub async fn check_plagiarism(
    gateway: &ModelGateway,
    text: &str,
) -> NormalizedResult<PlagiarismReport> {
    let messages = vec![Message::user(build_prompt(text))];
    let response = match gateway.dispatch(messages).send().await {
        Ok(response) => response,
        Err(err) => return NormalizedResult::failed(err),
    };

    match super::structured_payload::<PlagiarismPayload>("plagiarism", &response) {
        Some(payload) => NormalizedResult::Report(PlagiarismReport {
            original_text: text.to_string(),
            plagiarism_score: payload.plagiarism_score.clamp(0.0, 100.0),
            flagged_sentences: payload.flagged_sentences,
            feedback: payload.feedback.unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
        }),
        None => NormalizedResult::Report(PlagiarismReport {
            original_text: text.to_string(),
            plagiarism_score: 0.0,
            flagged_sentences: Vec::new(),
            feedback: FALLBACK_FEEDBACK.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_wraps_text_with_format_instructions() {
        let prompt = build_prompt("My essay text.");
        assert!(prompt.contains("Here is the text to analyze:\nMy essay text."));
        assert!(prompt.contains("Respond with ONLY a valid JSON object"));
    }

    #[test]
    fn sparse_payload_defaults_score_and_sentences() {
        let payload: PlagiarismPayload =
            serde_json::from_str(r#"{"feedback": "Looks clean."}"#).unwrap();
        assert_eq!(payload.plagiarism_score, 0.0);
        assert!(payload.flagged_sentences.is_empty());
        assert_eq!(payload.feedback.as_deref(), Some("Looks clean."));
    }

    #[test]
    fn score_only_payload_gets_default_feedback_text() {
        let payload: PlagiarismPayload =
            serde_json::from_str(r#"{"plagiarism_score": 42}"#).unwrap();
        assert_eq!(payload.plagiarism_score, 42.0);
        assert!(payload.feedback.is_none());
    }
}
