use serde::{Deserialize, Serialize};

use crate::state::Video;

/// A named collection of videos sharing a niche and default duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Free-text descriptor of the project's content theme.
    pub niche: String,
    /// Runtime applied to new videos when no explicit duration is given.
    pub default_minutes: u32,
    /// Most-recent-first.
    pub videos: Vec<Video>,
    /// Monotonic counter for minting video ids. Never decremented, so ids
    /// are not reused within a session.
    next_video_seq: u64,
}

impl Project {
    /// Create an empty project.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        niche: impl Into<String>,
        default_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            niche: niche.into(),
            default_minutes,
            videos: Vec::new(),
            next_video_seq: 1,
        }
    }

    /// Create a project seeded with existing videos. The id counter starts
    /// past the seeded videos.
    pub fn with_videos(
        id: impl Into<String>,
        name: impl Into<String>,
        niche: impl Into<String>,
        default_minutes: u32,
        videos: Vec<Video>,
    ) -> Self {
        let next_video_seq = videos.len() as u64 + 1;
        Self {
            id: id.into(),
            name: name.into(),
            niche: niche.into(),
            default_minutes,
            videos,
            next_video_seq,
        }
    }

    /// Find a video by ID
    pub fn find_video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Add a new READY video at the head of the list.
    ///
    /// Rejects titles that trim to empty. A `minutes` of zero falls back to
    /// the project's default. Returns the minted video id on success.
    pub fn add_video(&mut self, title: &str, minutes: u32) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let minutes = if minutes == 0 {
            self.default_minutes
        } else {
            minutes
        };
        let id = self.mint_video_id();
        self.videos
            .insert(0, Video::new_ready(id.clone(), title, minutes));
        Some(id)
    }

    fn mint_video_id(&mut self) -> String {
        let id = format!("v{}", self.next_video_seq);
        self.next_video_seq += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VideoStatus;
    use pretty_assertions::assert_eq;

    fn sample_project() -> Project {
        Project::new("p9", "Ghost Towns", "Abandoned places", 20)
    }

    #[test]
    fn test_add_video_inserts_at_head() {
        let mut project = sample_project();
        project.add_video("First", 10).unwrap();
        project.add_video("Second", 12).unwrap();

        assert_eq!(project.video_count(), 2);
        assert_eq!(project.videos[0].title, "Second");
        assert_eq!(project.videos[1].title, "First");
        assert_eq!(project.videos[0].status, VideoStatus::Ready);
    }

    #[test]
    fn test_add_video_rejects_blank_title() {
        let mut project = sample_project();
        assert!(project.add_video("", 10).is_none());
        assert!(project.add_video("   ", 10).is_none());
        assert_eq!(project.video_count(), 0);
    }

    #[test]
    fn test_add_video_trims_title() {
        let mut project = sample_project();
        project.add_video("  Spaced Out  ", 10).unwrap();
        assert_eq!(project.videos[0].title, "Spaced Out");
    }

    #[test]
    fn test_zero_minutes_falls_back_to_default() {
        let mut project = sample_project();
        project.add_video("Default Length", 0).unwrap();
        assert_eq!(project.videos[0].minutes, 20);

        project.add_video("Explicit Length", 45).unwrap();
        assert_eq!(project.videos[0].minutes, 45);
    }

    #[test]
    fn test_video_ids_are_monotonic() {
        let mut project = sample_project();
        let first = project.add_video("One", 10).unwrap();
        let second = project.add_video("Two", 10).unwrap();
        assert_eq!(first, "v1");
        assert_eq!(second, "v2");
        // A rejected add must not consume an id.
        assert!(project.add_video("", 10).is_none());
        assert_eq!(project.add_video("Three", 10).unwrap(), "v3");
    }

    #[test]
    fn test_project_serialization() {
        let mut project = sample_project();
        project.add_video("Round Trip", 30);
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }
}
