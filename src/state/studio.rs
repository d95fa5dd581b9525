use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NICHE, DEFAULT_PROJECT_MINUTES};
use crate::state::{seed, Project, VideoDetail};

/// The session-scoped store behind every page.
///
/// One `Studio` lives for the whole process (shared through Dioxus context),
/// so edits survive navigation between pages. Nothing is persisted to disk;
/// closing the app discards the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Studio {
    /// Most-recent-first; the canonical demo project seeds the tail.
    projects: Vec<Project>,
    /// Monotonic counter for minting project ids.
    next_project_seq: u64,
}

impl Default for Studio {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Studio {
    /// A fresh session populated from the seed resolver.
    pub fn seeded() -> Self {
        let projects = seed::seed_projects();
        let next_project_seq = projects.len() as u64 + 1;
        Self {
            projects,
            next_project_seq,
        }
    }

    /// All projects, most-recent-first.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Find a project by ID
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve a routed project id to a displayable record: the stored
    /// project when known, otherwise a generic placeholder. Never fails.
    pub fn resolve_project(&self, project_id: &str) -> Project {
        let project_id = project_id.trim();
        match self.get(project_id) {
            Some(project) => project.clone(),
            None => seed::placeholder_project(project_id),
        }
    }

    /// Create a new project at the head of the list.
    ///
    /// Rejects names that trim to empty. An empty niche falls back to
    /// [`DEFAULT_NICHE`]. Returns the minted project id on success.
    pub fn add_project(&mut self, name: &str, niche: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let niche = niche.trim();
        let niche = if niche.is_empty() { DEFAULT_NICHE } else { niche };

        let id = self.mint_project_id();
        let project = Project::new(id.clone(), name, niche, DEFAULT_PROJECT_MINUTES);
        self.projects.insert(0, project);
        Some(id)
    }

    /// Add a video to the project routed as `project_id`.
    ///
    /// Unknown project ids are upserted as placeholder projects first, so a
    /// video added on a freshly routed page lands in the session store.
    /// Returns the minted video id, or `None` when the title is rejected.
    pub fn add_video(&mut self, project_id: &str, title: &str, minutes: u32) -> Option<String> {
        let index = self.ensure_project(project_id.trim());
        self.projects[index].add_video(title, minutes)
    }

    /// Detail projection for a `(project, video)` pair. Unknown pairs map to
    /// the generic placeholder record.
    pub fn video_detail(&self, project_id: &str, video_id: &str) -> VideoDetail {
        let video_id = video_id.trim();
        match self
            .get(project_id.trim())
            .and_then(|p| p.find_video(video_id))
        {
            Some(video) => video.detail(),
            None => seed::placeholder_detail(video_id),
        }
    }

    /// Sum of video counts across all projects.
    pub fn total_videos(&self) -> usize {
        self.projects.iter().map(|p| p.video_count()).sum()
    }

    /// Index of the project with the given routed id (already trimmed),
    /// inserting a placeholder at the tail when it is unknown.
    fn ensure_project(&mut self, project_id: &str) -> usize {
        let placeholder = seed::placeholder_project(project_id);
        if let Some(index) = self.projects.iter().position(|p| p.id == placeholder.id) {
            return index;
        }
        self.projects.push(placeholder);
        self.projects.len() - 1
    }

    /// Mint the next `p{n}` id. Placeholder projects adopted under routed
    /// ids may already occupy a slot; those are skipped so ids stay unique.
    fn mint_project_id(&mut self) -> String {
        loop {
            let id = format!("p{}", self.next_project_seq);
            self.next_project_seq += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VideoStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_session() {
        let studio = Studio::seeded();
        assert_eq!(studio.list().len(), 1);
        assert_eq!(studio.list()[0].id, "p1");
        assert_eq!(studio.total_videos(), 1);
    }

    #[test]
    fn test_add_project_inserts_at_head() {
        let mut studio = Studio::seeded();
        let before = studio.list().len();

        let id = studio.add_project("Abandoned Science Experiments", "Lost labs");
        assert_eq!(id.as_deref(), Some("p2"));
        assert_eq!(studio.list().len(), before + 1);
        assert_eq!(studio.list()[0].name, "Abandoned Science Experiments");
        assert_eq!(studio.list()[0].niche, "Lost labs");
    }

    #[test]
    fn test_add_project_rejects_blank_name() {
        let mut studio = Studio::seeded();
        assert!(studio.add_project("", "niche").is_none());
        assert!(studio.add_project("   ", "niche").is_none());
        assert_eq!(studio.list().len(), 1);
    }

    #[test]
    fn test_ghost_towns_scenario() {
        let mut studio = Studio::seeded();
        studio.add_project("Ghost Towns", "").unwrap();

        let project = studio.list()[0].clone();
        assert_eq!(project.name, "Ghost Towns");
        assert_eq!(project.niche, "Custom niche");
        assert_eq!(project.default_minutes, 20);
        assert!(project.videos.is_empty());
    }

    #[test]
    fn test_add_video_on_canonical_project() {
        let mut studio = Studio::seeded();
        let id = studio.add_video("p1", "New Episode", 0).unwrap();
        assert_eq!(id, "v2");

        let project = studio.get("p1").unwrap();
        assert_eq!(project.video_count(), 2);
        let video = &project.videos[0];
        assert_eq!(video.title, "New Episode");
        assert_eq!(video.status, VideoStatus::Ready);
        // Zero minutes falls back to the canonical project's default of 30.
        assert_eq!(video.minutes, 30);
    }

    #[test]
    fn test_add_video_upserts_unknown_project() {
        let mut studio = Studio::seeded();
        studio.add_video("p99", "Orphan Episode", 12).unwrap();

        let project = studio.get("p99").unwrap();
        assert_eq!(project.name, "Custom Project");
        assert_eq!(project.video_count(), 1);
        // Upserted placeholders go to the tail; the dashboard head stays
        // reserved for explicit creation order.
        assert_eq!(studio.list().last().unwrap().id, "p99");
    }

    #[test]
    fn test_total_videos_invariant() {
        let mut studio = Studio::seeded();
        let check = |studio: &Studio| {
            let summed: usize = studio.list().iter().map(|p| p.video_count()).sum();
            assert_eq!(studio.total_videos(), summed);
        };

        check(&studio);
        studio.add_project("A", "");
        check(&studio);
        studio.add_video("p2", "One", 5);
        check(&studio);
        studio.add_video("p1", "Two", 0);
        check(&studio);
        studio.add_video("nowhere", "Three", 7);
        check(&studio);
        assert_eq!(studio.total_videos(), 4);
    }

    #[test]
    fn test_project_ids_are_monotonic() {
        let mut studio = Studio::seeded();
        assert_eq!(studio.add_project("A", "").unwrap(), "p2");
        assert_eq!(studio.add_project("B", "").unwrap(), "p3");
        assert!(studio.add_project(" ", "").is_none());
        assert_eq!(studio.add_project("C", "").unwrap(), "p4");
    }

    #[test]
    fn test_minted_ids_skip_adopted_placeholders() {
        let mut studio = Studio::seeded();
        // Adding a video on an unrouted "p2" adopts a placeholder project
        // under that id before any explicit creation reaches the counter.
        studio.add_video("p2", "Orphan Episode", 5).unwrap();

        let id = studio.add_project("Ghost Towns", "").unwrap();
        assert_eq!(id, "p3");
        assert_eq!(studio.list().iter().filter(|p| p.id == "p2").count(), 1);
        assert_eq!(studio.get("p2").unwrap().name, "Custom Project");
        assert_eq!(studio.get("p3").unwrap().name, "Ghost Towns");
    }

    #[test]
    fn test_routed_ids_are_trimmed() {
        let mut studio = Studio::seeded();
        studio.add_video(" p7 ", "Padded Episode", 5).unwrap();

        // Lookup, resolution, and upsert all key on the trimmed id.
        assert_eq!(studio.get("p7").unwrap().video_count(), 1);
        assert_eq!(studio.resolve_project(" p7 ").video_count(), 1);
        assert!(studio.get(" p7 ").is_none());

        let detail = studio.video_detail(" p1 ", " v1 ");
        assert_eq!(detail.id, "v1");
        assert_eq!(detail.minutes, 30);
    }

    #[test]
    fn test_canonical_video_detail() {
        let studio = Studio::seeded();
        let detail = studio.video_detail("p1", "v1");
        assert_eq!(
            detail.title,
            "The Nurse Who Hid Her Past from an Entire Nursing Home"
        );
        assert_eq!(detail.chapters.len(), 6);
        assert_eq!(detail.tags.len(), 5);
        assert_eq!(detail.minutes, 30);
    }

    #[test]
    fn test_unknown_pair_detail_is_placeholder() {
        let studio = Studio::seeded();
        let detail = studio.video_detail("zzz", "zzz");
        assert_eq!(detail.title, "Demo AI-generated video");
        assert_eq!(
            detail.tags,
            vec!["autotube", "ai youtube automation", "demo"]
        );

        // A known project with an unknown video id is still a placeholder.
        let detail = studio.video_detail("p1", "v404");
        assert_eq!(detail.id, "v404");
        assert_eq!(detail.title, "Demo AI-generated video");
    }

    #[test]
    fn test_session_video_gets_detail_projection() {
        let mut studio = Studio::seeded();
        let id = studio.add_video("p1", "Fresh Episode", 18).unwrap();

        let detail = studio.video_detail("p1", &id);
        assert_eq!(detail.title, "Fresh Episode");
        assert_eq!(detail.minutes, 18);
        assert_eq!(
            detail.tags,
            vec!["autotube", "ai youtube automation", "demo"]
        );
    }

    #[test]
    fn test_edits_survive_store_round_trips() {
        // Dashboard -> project -> dashboard: the same store backs all pages,
        // so earlier edits remain visible.
        let mut studio = Studio::seeded();
        studio.add_project("Road Trips", "Scenic drives").unwrap();
        studio.add_video("p2", "Route 66", 0).unwrap();

        let reread = studio.resolve_project("p2");
        assert_eq!(reread.video_count(), 1);
        assert_eq!(studio.total_videos(), 2);
    }
}
