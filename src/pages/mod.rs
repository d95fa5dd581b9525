//! Routed pages.

mod dashboard;
mod landing;
mod project;
mod video_detail;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use project::ProjectPage;
pub use video_detail::VideoDetailPage;
