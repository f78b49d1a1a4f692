//! 功能函数模块：每项助手能力对应一个纯转换函数。
//!
//! # Feature Functions
//!
//! Each feature is one function: a prompt template, one gateway call, and a
//! normalization step that guarantees the shape of what comes back. Features
//! never return `Err` and never panic on bad model output. Transport and
//! remote failures become the error-shaped result; parse failures engage the
//! feature's documented fallback, because the remote model's adherence to a
//! requested JSON format is advisory, not enforced.
//!
//! | Feature | Entry point |
//! |---------|-------------|
//! | Grammar check | [`grammar::check_grammar`] |
//! | Chat | [`chat::respond`] |
//! | Paraphrase | [`paraphrase::paraphrase`] |
//! | Plagiarism check | [`plagiarism::check_plagiarism`] |
//! | Transcript summary | [`summarize::summarize_transcript`] |
//! | Image analysis | [`vision::analyze_image`] |

pub mod chat;
pub mod grammar;
pub mod paraphrase;
pub mod plagiarism;
pub mod summarize;
pub mod vision;

pub use chat::ChatReply;
pub use grammar::GrammarReport;
pub use paraphrase::{ParaphraseReport, ParaphraseStyle};
pub use plagiarism::PlagiarismReport;
pub use summarize::TranscriptSummary;
pub use vision::ImageAnalysis;

use serde::de::DeserializeOwned;
use tracing::warn;

/// Extract and decode the structured payload a feature asked the model for.
///
/// `None` means either no extraction stage produced JSON or the JSON did not
/// match the expected shape. Both cases are logged and handed to the caller's
/// fallback path; neither is a hard failure.
pub(crate) fn structured_payload<T: DeserializeOwned>(feature: &'static str, response: &str) -> Option<T> {
    let value = match crate::extract::extract_json(response) {
        Ok(value) => value,
        Err(err) => {
            warn!(feature, error = %err, "model output was not structured JSON, engaging fallback");
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(payload) => Some(payload),
        Err(err) => {
            warn!(feature, error = %err, "structured payload did not match the expected shape, engaging fallback");
            None
        }
    }
}
