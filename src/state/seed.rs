//! Seed/demo-data resolver.
//!
//! Produces deterministic records from route identifiers: one canonical demo
//! project ("Nursing Home Stories") and generic placeholders for everything
//! else. In the real product these records would come from an API; the demo
//! resolves them from literals so it runs with no backend at all.
//!
//! Every function here is pure and total: any input string, including empty
//! or malformed ids, maps to a structurally valid record.

use chrono::{DateTime, Utc};

use crate::constants::{DEFAULT_NICHE, DEFAULT_PROJECT_MINUTES};
use crate::state::{Chapter, Project, Video, VideoContent, VideoDetail, VideoStatus};

/// Id of the one built-in demo project.
pub const CANONICAL_PROJECT_ID: &str = "p1";
/// Id of the built-in demo project's one video.
pub const CANONICAL_VIDEO_ID: &str = "v1";

const CANONICAL_VIDEO_TITLE: &str = "The Nurse Who Hid Her Past from an Entire Nursing Home";
const PLACEHOLDER_PROJECT_ID: &str = "custom";
const PLACEHOLDER_VIDEO_ID: &str = "v-demo";

/// Creation timestamp applied to seeded records, fixed so the resolver is
/// idempotent: 2025-01-01T00:00:00Z.
const SEED_TIMESTAMP_SECS: i64 = 1_735_689_600;

fn seed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_TIMESTAMP_SECS, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// The projects present when a session starts.
pub fn seed_projects() -> Vec<Project> {
    vec![canonical_project()]
}

/// The canonical "Nursing Home Stories" demo project with its one video.
pub fn canonical_project() -> Project {
    let video = Video {
        id: CANONICAL_VIDEO_ID.to_string(),
        title: CANONICAL_VIDEO_TITLE.to_string(),
        status: VideoStatus::Ready,
        minutes: 30,
        created_at: seed_timestamp(),
        content: Some(canonical_content()),
    };
    Project::with_videos(
        CANONICAL_PROJECT_ID,
        "Nursing Home Stories",
        "Emotional + Mystery Nursing Home",
        30,
        vec![video],
    )
}

/// Generic placeholder project for an unrecognized id. An id that trims to
/// empty falls back to a fixed literal.
pub fn placeholder_project(project_id: &str) -> Project {
    let id = project_id.trim();
    let id = if id.is_empty() {
        PLACEHOLDER_PROJECT_ID
    } else {
        id
    };
    Project::new(id, "Custom Project", DEFAULT_NICHE, DEFAULT_PROJECT_MINUTES)
}

/// Full content of the canonical demo video.
pub fn canonical_content() -> VideoContent {
    VideoContent {
        script: "Narrator: In a quiet corner of the nursing home, between the humming lights and the ticking clocks, Nurse Evelyn carried a past she hoped no one would ever discover...\n\n[Demo script only — real app would generate full 20–40 minute script via AI.]".to_string(),
        description: "In this emotional nursing home story, we follow Nurse Evelyn — a calm professional on the outside, but hiding a history that could change everything for her patients.".to_string(),
        tags: vec![
            "nursing home story".to_string(),
            "emotional story".to_string(),
            "nurse secret".to_string(),
            "elderly care".to_string(),
            "sad story".to_string(),
        ],
        chapters: vec![
            Chapter::new("Cold open — the quiet shift", "00:00"),
            Chapter::new("A new resident arrives", "03:10"),
            Chapter::new("Suspicious familiarity", "08:40"),
            Chapter::new("The hidden file", "14:05"),
            Chapter::new("The confrontation", "23:30"),
            Chapter::new("Bitter truth & soft forgiveness", "28:55"),
        ],
    }
}

/// Template content for videos that were never "generated": the demo script
/// block, a stock description, and generic tags/chapters.
pub fn template_content() -> VideoContent {
    VideoContent {
        script: "Narrator: This is a demo script block. In the real AutoTube Studio, your full AI-generated script would appear here based on your niche, title and runtime.".to_string(),
        description: "Demo description — the real system would build SEO-optimized descriptions around your title and audience.".to_string(),
        tags: vec![
            "autotube".to_string(),
            "ai youtube automation".to_string(),
            "demo".to_string(),
        ],
        chapters: vec![
            Chapter::new("Hook", "00:00"),
            Chapter::new("Build-up", "04:15"),
            Chapter::new("Reveal", "11:30"),
        ],
    }
}

/// Generic detail record for an unrecognized `(project, video)` pair.
pub fn placeholder_detail(video_id: &str) -> VideoDetail {
    let id = video_id.trim();
    let id = if id.is_empty() {
        PLACEHOLDER_VIDEO_ID
    } else {
        id
    };
    let content = template_content();
    VideoDetail {
        id: id.to_string(),
        title: "Demo AI-generated video".to_string(),
        minutes: 20,
        status: VideoStatus::Ready,
        script: content.script,
        description: content.description,
        tags: content.tags,
        chapters: content.chapters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_project_shape() {
        let project = canonical_project();
        assert_eq!(project.id, "p1");
        assert_eq!(project.name, "Nursing Home Stories");
        assert_eq!(project.default_minutes, 30);
        assert_eq!(project.video_count(), 1);

        let video = &project.videos[0];
        assert_eq!(video.id, "v1");
        assert_eq!(video.title, CANONICAL_VIDEO_TITLE);
        assert_eq!(video.minutes, 30);

        let content = video.content.as_ref().unwrap();
        assert_eq!(content.tags.len(), 5);
        assert_eq!(content.chapters.len(), 6);
    }

    #[test]
    fn test_resolver_is_deterministic() {
        assert_eq!(canonical_project(), canonical_project());
        assert_eq!(placeholder_project("p42"), placeholder_project("p42"));
        assert_eq!(placeholder_detail("v9"), placeholder_detail("v9"));
    }

    #[test]
    fn test_resolver_is_total() {
        let long_id = "x".repeat(10_000);
        let inputs: [&str; 7] = ["", " ", "p1", "zzz", "プロジェクト", "💾", &long_id];
        for input in inputs {
            let project = placeholder_project(input);
            assert!(!project.id.is_empty());
            assert!(!project.name.is_empty());
            assert!(project.default_minutes > 0);

            let detail = placeholder_detail(input);
            assert!(!detail.id.is_empty());
            assert!(!detail.title.is_empty());
        }
    }

    #[test]
    fn test_placeholder_project_defaults() {
        let project = placeholder_project("zzz");
        assert_eq!(project.id, "zzz");
        assert_eq!(project.name, "Custom Project");
        assert_eq!(project.niche, "Custom niche");
        assert_eq!(project.default_minutes, 20);
        assert!(project.videos.is_empty());

        // Empty ids map to the fixed fallback literal.
        assert_eq!(placeholder_project("").id, "custom");
        assert_eq!(placeholder_detail("").id, "v-demo");
    }

    #[test]
    fn test_placeholder_detail_content() {
        let detail = placeholder_detail("zzz");
        assert_eq!(detail.title, "Demo AI-generated video");
        assert_eq!(detail.minutes, 20);
        assert_eq!(
            detail.tags,
            vec!["autotube", "ai youtube automation", "demo"]
        );
        assert_eq!(detail.chapters.len(), 3);
    }
}
