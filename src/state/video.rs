use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::seed;

/// Lifecycle state of a generated video.
///
/// The demo pipeline produces videos synchronously, so user-created videos
/// jump straight from `Requested` to `Ready`. `Generating` and `Failed`
/// exist for the asynchronous pipeline and are only reachable through
/// `can_transition`-checked moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoStatus {
    Requested,
    Generating,
    Ready,
    Failed,
}

impl VideoStatus {
    /// Whether moving from this status to `next` is a legal transition.
    pub fn can_transition(self, next: VideoStatus) -> bool {
        matches!(
            (self, next),
            (VideoStatus::Requested, VideoStatus::Generating)
                | (VideoStatus::Requested, VideoStatus::Ready)
                | (VideoStatus::Generating, VideoStatus::Ready)
                | (VideoStatus::Generating, VideoStatus::Failed)
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoStatus::Requested => "REQUESTED",
            VideoStatus::Generating => "GENERATING",
            VideoStatus::Ready => "READY",
            VideoStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named chapter marker inside a video ("Cold open", "00:00").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub time: String,
}

impl Chapter {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
        }
    }
}

/// The heavy content fields of a video: script, SEO metadata, chapters.
///
/// Stored as an optional payload on [`Video`] so list views stay lightweight
/// while the detail page projects the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    pub script: String,
    pub description: String,
    /// Insertion order is display order.
    pub tags: Vec<String>,
    pub chapters: Vec<Chapter>,
}

/// A generated video owned by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub status: VideoStatus,
    pub minutes: u32,
    pub created_at: DateTime<Utc>,
    /// Full content when it has been "generated"; `None` for videos created
    /// through the instant demo flow.
    pub content: Option<VideoContent>,
}

impl Video {
    /// Create a READY video with no heavy content, timestamped now.
    pub fn new_ready(id: impl Into<String>, title: impl Into<String>, minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: VideoStatus::Ready,
            minutes,
            created_at: Utc::now(),
            content: None,
        }
    }

    /// Project this video into its detail-page shape.
    ///
    /// Videos without stored content get the generic template content, keyed
    /// to their own title, minutes, and status.
    pub fn detail(&self) -> VideoDetail {
        let content = self
            .content
            .clone()
            .unwrap_or_else(seed::template_content);
        VideoDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            minutes: self.minutes,
            status: self.status,
            script: content.script,
            description: content.description,
            tags: content.tags,
            chapters: content.chapters,
        }
    }
}

/// The detail-page projection of a video: one flat record with the heavy
/// fields resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub id: String,
    pub title: String,
    pub minutes: u32,
    pub status: VideoStatus,
    pub script: String,
    pub description: String,
    pub tags: Vec<String>,
    pub chapters: Vec<Chapter>,
}
