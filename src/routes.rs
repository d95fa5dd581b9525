//! Client-side route surface.

use dioxus::prelude::*;

use crate::components::AppShell;
use crate::pages::{DashboardPage, LandingPage, ProjectPage, VideoDetailPage};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    LandingPage {},

    #[layout(AppShell)]
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/projects/:project_id")]
    ProjectPage { project_id: String },
    #[route("/projects/:project_id/videos/:video_id")]
    VideoDetailPage {
        project_id: String,
        video_id: String,
    },
}
