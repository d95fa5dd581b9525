//! State management module
//!
//! This module contains the core data structures for the application:
//! - Studio: the session-scoped store shared by every page
//! - Project: a named collection of videos sharing a niche
//! - Video: a generated video with an optional heavy content payload
//! - seed: the deterministic demo-data resolver

mod project;
mod studio;
mod video;

pub mod seed;

pub use project::*;
pub use studio::*;
pub use video::*;
