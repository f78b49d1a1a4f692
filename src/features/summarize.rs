//! Transcript summarization.

use crate::gateway::ModelGateway;
use crate::types::{Message, NormalizedResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Character ceiling applied to transcripts before dispatch, keeping prompts
/// safely inside the remote context window (roughly 3750 tokens of input).
pub const TRANSCRIPT_CHAR_LIMIT: usize = 15_000;

/// Marker appended whenever the ceiling cuts a transcript.
pub const TRUNCATION_MARKER: &str = "... [transcript truncated]";

/// Title reported when the caller supplied none.
pub const DEFAULT_TITLE: &str = "Video Summary";

// Summaries are prose, not generation; a tighter output ceiling than text
// dispatch keeps latency and cost down.
const SUMMARY_MAX_TOKENS: u32 = 2048;

/// Guaranteed-shape transcript summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    /// Markdown summary with overview, key points and takeaways sections.
    pub summary: String,
    pub title: String,
}

/// Cut an over-long transcript at the character ceiling and annotate the cut.
///
/// This is correctness-preserving degradation, not an error: the summary is
/// produced from the surviving prefix and the marker tells the model (and any
/// reader of the prompt) that the tail is missing.
pub fn truncate_transcript(transcript: &str) -> Cow<'_, str> {
    if transcript.len() <= TRANSCRIPT_CHAR_LIMIT {
        return Cow::Borrowed(transcript);
    }
    let mut end = TRANSCRIPT_CHAR_LIMIT;
    while !transcript.is_char_boundary(end) {
        end -= 1;
    }
    debug!(
        original_chars = transcript.len(),
        kept_chars = end,
        "transcript exceeded the character ceiling, truncating"
    );
    Cow::Owned(format!("{}{}", &transcript[..end], TRUNCATION_MARKER))
}

fn build_prompt(transcript: &str, title: Option<&str>) -> String {
    let title_context = match title {
        Some(t) if !t.is_empty() => format!("\nVideo Title: {t}"),
        _ => String::new(),
    };
    format!(
        "You are an expert content summarizer. Your task is to create a comprehensive yet concise summary of the following video transcript.\n\
         {title_context}\n\n\
         Transcript:\n{transcript}\n\n\
         Please provide:\n\
         1. A brief overview (2-3 sentences)\n\
         2. Key points discussed in the video (bullet points)\n\
         3. Main takeaways or conclusions\n\n\
         Format your response clearly with headers."
    )
}

/// Summarize a flattened transcript.
///
/// The transcript is truncated to [`TRANSCRIPT_CHAR_LIMIT`] characters first.
/// An empty or missing `title` falls back to [`DEFAULT_TITLE`] in the report.
pub async fn summarize_transcript(
    gateway: &ModelGateway,
    transcript: &str,
    title: Option<&str>,
) -> NormalizedResult<TranscriptSummary> {
    let transcript = truncate_transcript(transcript);
    let messages = vec![Message::user(build_prompt(&transcript, title))];

    match gateway
        .dispatch(messages)
        .max_tokens(SUMMARY_MAX_TOKENS)
        .send()
        .await
    {
        Ok(summary) => NormalizedResult::Report(TranscriptSummary {
            summary,
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TITLE)
                .to_string(),
        }),
        Err(err) => NormalizedResult::failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_transcripts_pass_through_unchanged() {
        let text = "hello world";
        assert!(matches!(truncate_transcript(text), Cow::Borrowed(t) if t == text));

        let exactly_at_limit = "a".repeat(TRANSCRIPT_CHAR_LIMIT);
        assert!(matches!(truncate_transcript(&exactly_at_limit), Cow::Borrowed(_)));
    }

    #[test]
    fn long_transcripts_are_cut_and_annotated() {
        let text = "a".repeat(20_000);
        let truncated = truncate_transcript(&text);
        assert_eq!(
            truncated.len(),
            TRANSCRIPT_CHAR_LIMIT + TRUNCATION_MARKER.len()
        );
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert!(truncated.starts_with("aaaa"));
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        // Two-byte code points straddle the ceiling; the cut must back off to
        // a boundary instead of slicing mid-character.
        let text = "é".repeat(10_000);
        let truncated = truncate_transcript(&text);
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        let body = truncated.trim_end_matches(TRUNCATION_MARKER);
        assert!(body.len() <= TRANSCRIPT_CHAR_LIMIT);
        assert!(body.chars().all(|c| c == 'é'));
    }

    #[test]
    fn prompt_includes_title_context_only_when_given() {
        let with_title = build_prompt("talk text", Some("Rust in Production"));
        assert!(with_title.contains("Video Title: Rust in Production"));

        let without = build_prompt("talk text", None);
        assert!(!without.contains("Video Title:"));
        assert!(without.contains("Transcript:\ntalk text"));
    }
}
