//! Video transcript acquisition and end-to-end summarization.
//!
//! Caption download is an external collaborator behind the
//! [`TranscriptSource`] trait; this crate never scrapes captions itself. What
//! lives here is everything around that seam: URL-to-id extraction, segment
//! flattening and the fetch-flatten-summarize orchestration.

use crate::features::summarize::{self, TranscriptSummary};
use crate::gateway::ModelGateway;
use crate::types::NormalizedResult;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

/// User-facing message for videos without captions. Sources should return
/// [`Error::TranscriptUnavailable`] with this text when the video exists but
/// has no usable transcript.
pub const NO_TRANSCRIPT_MESSAGE: &str =
    "No transcript available for this video. The video might not have captions enabled.";

/// Identifier of a hosted video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the video id from the common YouTube URL shapes:
    /// `watch?v=`, `youtu.be/`, `/embed/`, `/v/` and `/shorts/`.
    pub fn from_url(input: &str) -> Result<Self> {
        let url = Url::parse(input)
            .map_err(|_| Error::validation(format!("not a recognizable video URL: {input}")))?;

        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);

        let id = match host {
            "youtu.be" => first_path_segment(&url),
            "youtube.com" | "m.youtube.com" | "music.youtube.com" => {
                if url.path() == "/watch" {
                    url.query_pairs()
                        .find(|(key, _)| key == "v")
                        .map(|(_, value)| value.into_owned())
                } else {
                    segment_after(&url, &["embed", "v", "shorts"])
                }
            }
            _ => None,
        };

        id.filter(|id| !id.is_empty())
            .map(VideoId)
            .ok_or_else(|| Error::validation(format!("not a recognizable video URL: {input}")))
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn first_path_segment(url: &Url) -> Option<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn segment_after(url: &Url, prefixes: &[&str]) -> Option<String> {
    let mut segments = url.path_segments()?;
    let first = segments.next()?;
    if prefixes.contains(&first) {
        segments.next().map(str::to_owned)
    } else {
        None
    }
}

/// One caption segment as the captions collaborator delivers it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset into the video, in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: None,
            duration: None,
        }
    }
}

/// A fetched transcript: caption segments in playback order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    /// The single space-joined text the summarizer consumes.
    pub fn flatten(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Captions collaborator. Implementations download captions for a video,
/// preferring English tracks where several are available, and map "no
/// captions" conditions to [`Error::TranscriptUnavailable`] with
/// [`NO_TRANSCRIPT_MESSAGE`].
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video: &VideoId) -> Result<Transcript>;
}

/// Fetch, flatten and summarize one video URL end to end.
///
/// Every failure surfaces as the error-shaped result: an unrecognizable URL,
/// a captionless video, transport trouble. The caller renders exactly what a
/// feature function would hand back.
pub async fn summarize_video(
    gateway: &ModelGateway,
    source: &dyn TranscriptSource,
    video_url: &str,
    title: Option<&str>,
) -> NormalizedResult<TranscriptSummary> {
    let video = match VideoId::from_url(video_url) {
        Ok(video) => video,
        Err(err) => return NormalizedResult::failed(err),
    };
    let transcript = match source.fetch(&video).await {
        Ok(transcript) => transcript,
        Err(err) => return NormalizedResult::failed(err),
    };
    summarize::summarize_transcript(gateway, &transcript.flatten(), title).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_urls_yield_the_v_parameter() {
        let id = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");

        let with_extras =
            VideoId::from_url("https://youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=PL1").unwrap();
        assert_eq!(with_extras.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn short_embed_and_shorts_urls_are_recognized() {
        for (url, expected) in [
            ("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/v/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/shorts/abc123XYZ_-", "abc123XYZ_-"),
            ("https://m.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ] {
            let id = VideoId::from_url(url).unwrap();
            assert_eq!(id.as_str(), expected, "url: {url}");
        }
    }

    #[test]
    fn unrelated_urls_are_rejected() {
        for url in [
            "https://vimeo.com/12345",
            "https://www.youtube.com/feed/subscriptions",
            "https://www.youtube.com/watch?list=PL1",
            "not a url at all",
        ] {
            let err = VideoId::from_url(url).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "url: {url}");
        }
    }

    #[test]
    fn flatten_joins_segments_with_single_spaces() {
        let transcript = Transcript::new(vec![
            TranscriptSegment::new("hello"),
            TranscriptSegment::new("world,"),
            TranscriptSegment::new("again"),
        ]);
        assert_eq!(transcript.flatten(), "hello world, again");
    }

    #[test]
    fn empty_transcript_flattens_to_empty_string() {
        let transcript = Transcript::default();
        assert!(transcript.is_empty());
        assert_eq!(transcript.flatten(), "");
    }
}
