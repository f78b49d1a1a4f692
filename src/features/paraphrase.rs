//! Style-guided paraphrasing.

use crate::gateway::ModelGateway;
use crate::types::{Message, NormalizedResult};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of paraphrasing styles.
///
/// Each style maps to one guideline sentence in the prompt. Adding a style
/// means adding a variant and its guideline; no other code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParaphraseStyle {
    Fluency,
    Humanize,
    Formal,
    Academic,
    Simple,
    Creative,
    Shorten,
}

impl ParaphraseStyle {
    /// Every style, in presentation order.
    pub const ALL: [ParaphraseStyle; 7] = [
        ParaphraseStyle::Fluency,
        ParaphraseStyle::Humanize,
        ParaphraseStyle::Formal,
        ParaphraseStyle::Academic,
        ParaphraseStyle::Simple,
        ParaphraseStyle::Creative,
        ParaphraseStyle::Shorten,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParaphraseStyle::Fluency => "Fluency",
            ParaphraseStyle::Humanize => "Humanize",
            ParaphraseStyle::Formal => "Formal",
            ParaphraseStyle::Academic => "Academic",
            ParaphraseStyle::Simple => "Simple",
            ParaphraseStyle::Creative => "Creative",
            ParaphraseStyle::Shorten => "Shorten",
        }
    }

    /// The guideline sentence injected into the prompt for this style.
    pub fn guideline(&self) -> &'static str {
        match self {
            ParaphraseStyle::Fluency => {
                "Make the text flow naturally and smoothly, focusing on readability."
            }
            ParaphraseStyle::Humanize => {
                "Make the text sound more conversational, warm, and relatable."
            }
            ParaphraseStyle::Formal => {
                "Use professional language, avoid contractions, and maintain a respectful tone."
            }
            ParaphraseStyle::Academic => {
                "Use scholarly language, precise terminology, and complex sentence structures."
            }
            ParaphraseStyle::Simple => {
                "Use straightforward language, short sentences, and common words."
            }
            ParaphraseStyle::Creative => {
                "Use vivid language, metaphors, and unique expressions."
            }
            ParaphraseStyle::Shorten => {
                "Condense the text while preserving the key information."
            }
        }
    }
}

impl fmt::Display for ParaphraseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParaphraseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fluency" => Ok(ParaphraseStyle::Fluency),
            "humanize" => Ok(ParaphraseStyle::Humanize),
            "formal" => Ok(ParaphraseStyle::Formal),
            "academic" => Ok(ParaphraseStyle::Academic),
            "simple" => Ok(ParaphraseStyle::Simple),
            "creative" => Ok(ParaphraseStyle::Creative),
            "shorten" => Ok(ParaphraseStyle::Shorten),
            other => Err(Error::validation(format!(
                "unknown paraphrase style '{other}'; expected one of Fluency, Humanize, Formal, Academic, Simple, Creative, Shorten"
            ))),
        }
    }
}

/// Guaranteed-shape paraphrase report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParaphraseReport {
    pub original_text: String,
    pub paraphrased_text: String,
    pub style: ParaphraseStyle,
}

fn build_prompt(text: &str, style: ParaphraseStyle) -> String {
    let guidelines = ParaphraseStyle::ALL
        .iter()
        .map(|s| format!("- {}: {}", s.as_str(), s.guideline()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are an expert language paraphraser. Your task is to paraphrase the given text according to the specified style.\n\n\
         Original text: {text}\n\
         Style: {style}\n\n\
         Style Guidelines:\n{guidelines}\n\n\
         Provide only the paraphrased text without any additional comments or explanations."
    )
}

/// Rewrite `text` in the requested style. The reply is used verbatim after
/// whitespace trimming; no structured extraction happens here.
pub async fn paraphrase(
    gateway: &ModelGateway,
    text: &str,
    style: ParaphraseStyle,
) -> NormalizedResult<ParaphraseReport> {
    let messages = vec![Message::user(build_prompt(text, style))];
    match gateway.dispatch(messages).send().await {
        Ok(response) => NormalizedResult::Report(ParaphraseReport {
            original_text: text.to_string(),
            paraphrased_text: response.trim().to_string(),
            style,
        }),
        Err(err) => NormalizedResult::failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!(
            "shorten".parse::<ParaphraseStyle>().unwrap(),
            ParaphraseStyle::Shorten
        );
        assert_eq!(
            "ACADEMIC".parse::<ParaphraseStyle>().unwrap(),
            ParaphraseStyle::Academic
        );
    }

    #[test]
    fn unknown_style_is_a_validation_error() {
        let err = "poetic".parse::<ParaphraseStyle>().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("poetic"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for style in ParaphraseStyle::ALL {
            assert_eq!(style.to_string().parse::<ParaphraseStyle>().unwrap(), style);
        }
    }

    #[test]
    fn prompt_names_the_style_and_lists_every_guideline() {
        let prompt = build_prompt("some text", ParaphraseStyle::Formal);
        assert!(prompt.contains("Style: Formal"));
        for style in ParaphraseStyle::ALL {
            assert!(prompt.contains(style.guideline()));
        }
    }

    #[test]
    fn style_serializes_as_its_display_name() {
        let value = serde_json::to_value(ParaphraseStyle::Humanize).unwrap();
        assert_eq!(value, "Humanize");
    }
}
