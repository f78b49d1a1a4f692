//! Guaranteed-shape results returned by every feature function.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The contract every feature upholds: either the feature's typed report or
/// an error mapping with a single `error` key. Presentation code renders one
/// of these two shapes and never sees a raw error or a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedResult<T> {
    /// The feature produced a renderable report.
    Report(T),
    /// The underlying call failed; `error` preserves the cause text.
    Failed { error: String },
}

impl<T> NormalizedResult<T> {
    /// Wrap a failure cause into the error-shaped variant.
    pub fn failed(cause: impl fmt::Display) -> Self {
        NormalizedResult::Failed {
            error: cause.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, NormalizedResult::Failed { .. })
    }

    pub fn report(&self) -> Option<&T> {
        match self {
            NormalizedResult::Report(report) => Some(report),
            NormalizedResult::Failed { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<T> {
        match self {
            NormalizedResult::Report(report) => Some(report),
            NormalizedResult::Failed { .. } => None,
        }
    }

    /// The failure cause, when this is the error shape.
    pub fn error(&self) -> Option<&str> {
        match self {
            NormalizedResult::Report(_) => None,
            NormalizedResult::Failed { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn report_serializes_transparently() {
        let result = NormalizedResult::Report(Sample { value: 7 });
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"value": 7}));
    }

    #[test]
    fn failure_serializes_as_single_error_key() {
        let result: NormalizedResult<Sample> = NormalizedResult::failed("boom");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"error": "boom"}));
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn accessors_distinguish_shapes() {
        let ok = NormalizedResult::Report(Sample { value: 1 });
        assert!(!ok.is_failed());
        assert_eq!(ok.report().map(|s| s.value), Some(1));
        assert_eq!(ok.error(), None);

        let bad: NormalizedResult<Sample> = NormalizedResult::failed("no");
        assert!(bad.is_failed());
        assert_eq!(bad.error(), Some("no"));
        assert_eq!(bad.into_report(), None);
    }
}
