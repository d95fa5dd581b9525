//! Project page: header, the "generate video" form, and the video list.

use dioxus::prelude::*;

use crate::components::StatusBadge;
use crate::constants::*;
use crate::routes::Route;
use crate::state::Studio;
use crate::utils::{format_created_at, parse_minutes_input};

#[component]
pub fn ProjectPage(project_id: String) -> Element {
    let mut studio = use_context::<Signal<Studio>>();
    let nav = navigator();

    // Resolved on every render, so a changed route parameter swaps the view
    // wholesale. Unknown ids display as placeholders; the store is only
    // touched when a video is actually added.
    let project = studio.read().resolve_project(&project_id);
    let default_minutes = project.default_minutes;

    let mut title_input = use_signal(String::new);
    let mut minutes_input = use_signal(move || default_minutes.to_string());

    // Reset the form when this component instance is reused for a different
    // project id.
    let mut seeded_for = use_signal(|| project_id.clone());
    if seeded_for() != project_id {
        seeded_for.set(project_id.clone());
        title_input.set(String::new());
        minutes_input.set(default_minutes.to_string());
    }

    let create_project_id = project_id.clone();
    let mut create_video = move || {
        let minutes = parse_minutes_input(&minutes_input(), 0);
        if studio
            .write()
            .add_video(&create_project_id, &title_input(), minutes)
            .is_some()
        {
            title_input.set(String::new());
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px; max-width: 1100px;",

            header {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px;",
                div {
                    h1 { style: "margin: 0; font-size: 22px; font-weight: 600;", "{project.name}" }
                    p {
                        style: "margin: 4px 0 0 0; font-size: 12px; color: {TEXT_MUTED};",
                        "Niche: {project.niche} • Default {project.default_minutes} minutes • ID: {project.id}"
                    }
                }
                button {
                    style: "
                        padding: 6px 14px; border-radius: 999px;
                        border: 1px solid {BORDER_STRONG}; background: transparent;
                        color: {TEXT_SECONDARY}; font-size: 12px; cursor: pointer;
                    ",
                    onclick: move |_| { nav.push(Route::DashboardPage {}); },
                    "Back to dashboard"
                }
            }

            section {
                style: "
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                    background-color: {BG_CARD}; padding: 16px;
                    display: flex; flex-direction: column; gap: 12px; font-size: 13px;
                ",
                h2 { style: "margin: 0; font-size: 14px;", "Generate a new video (demo)" }
                p {
                    style: "margin: 0; font-size: 12px; color: {TEXT_MUTED};",
                    "In the real SaaS this would trigger the AI pipeline (outline, script, "
                    "SEO, thumbnails, voiceover MP3, chapters). Here we instantly create a "
                    "READY video record so you can see the flow."
                }
                div {
                    style: "display: flex; gap: 12px;",
                    input {
                        value: "{title_input}",
                        placeholder: "Video title...",
                        style: "
                            flex: 1; padding: 8px 12px; font-size: 12px;
                            background-color: {BG_INPUT}; color: {TEXT_PRIMARY};
                            border: 1px solid {BORDER_STRONG}; border-radius: 8px;
                            outline: none; user-select: text;
                        ",
                        oninput: move |e| title_input.set(e.value()),
                    }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{minutes_input}",
                        style: "
                            width: 110px; padding: 8px 12px; font-size: 12px;
                            background-color: {BG_INPUT}; color: {TEXT_PRIMARY};
                            border: 1px solid {BORDER_STRONG}; border-radius: 8px;
                            outline: none; user-select: text;
                        ",
                        oninput: move |e| minutes_input.set(e.value()),
                    }
                    button {
                        style: "
                            padding: 8px 16px; border: none; border-radius: 8px;
                            background-color: {ACCENT}; color: {BG_BASE};
                            font-size: 12px; font-weight: 600; cursor: pointer;
                        ",
                        onclick: move |_| create_video(),
                        "Generate (demo)"
                    }
                }
            }

            section {
                style: "display: flex; flex-direction: column; gap: 12px;",
                h2 { style: "margin: 0; font-size: 14px;", "Videos" }
                div {
                    style: "display: flex; flex-direction: column; gap: 8px; font-size: 13px;",
                    for video in project.videos.clone() {
                        Link {
                            key: "{video.id}",
                            to: Route::VideoDetailPage {
                                project_id: project.id.clone(),
                                video_id: video.id.clone(),
                            },
                            class: "project-card",
                            style: "
                                display: flex; align-items: center; justify-content: space-between;
                                border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                                background-color: {BG_CARD}; padding: 12px 16px;
                                color: {TEXT_PRIMARY}; text-decoration: none;
                            ",
                            div {
                                div { style: "font-weight: 500;", "{video.title}" }
                                div {
                                    style: "margin-top: 2px; font-size: 11px; color: {TEXT_DIM};",
                                    "{video.minutes} minutes • {format_created_at(&video.created_at)}"
                                }
                            }
                            StatusBadge { status: video.status }
                        }
                    }
                    if project.videos.is_empty() {
                        p {
                            style: "margin: 0; font-size: 12px; color: {TEXT_DIM};",
                            "No videos yet. Create your first one above."
                        }
                    }
                }
            }
        }
    }
}
