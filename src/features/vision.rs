//! Image analysis through the vision-capable model.

use crate::gateway::ModelGateway;
use crate::types::NormalizedResult;
use serde::{Deserialize, Serialize};

/// Prompt used when the caller does not supply one.
pub const DEFAULT_PROMPT: &str = "Describe this image in detail.";

/// Guaranteed-shape image analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub analysis: String,
}

/// Describe or answer a question about an image.
///
/// `image_url` is an https URL or a base64 `data:` URL (see
/// [`data_url_from_file`](crate::types::data_url_from_file) for local files).
/// Routing goes to the vision model; the text default cannot process images.
pub async fn analyze_image(
    gateway: &ModelGateway,
    image_url: &str,
    prompt: Option<&str>,
) -> NormalizedResult<ImageAnalysis> {
    let prompt = prompt
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PROMPT);

    match gateway.dispatch_vision(prompt, image_url).send().await {
        Ok(analysis) => NormalizedResult::Report(ImageAnalysis { analysis }),
        Err(err) => NormalizedResult::failed(err),
    }
}
