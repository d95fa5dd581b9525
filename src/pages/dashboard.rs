//! Dashboard: workspace stats, the new-project form, and the project grid.

use dioxus::prelude::*;

use crate::components::StatCard;
use crate::constants::*;
use crate::routes::Route;
use crate::state::Studio;

#[component]
pub fn DashboardPage() -> Element {
    let mut studio = use_context::<Signal<Studio>>();

    let mut name_input = use_signal(String::new);
    let mut niche_input = use_signal(String::new);

    // Recomputed only when the store changes.
    let total_videos = use_memo(move || studio.read().total_videos());

    let mut create_project = move || {
        if studio
            .write()
            .add_project(&name_input(), &niche_input())
            .is_some()
        {
            name_input.set(String::new());
            niche_input.set(String::new());
        }
    };

    let projects = studio.read().list().to_vec();
    let project_count = projects.len();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px; max-width: 1100px;",

            header {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px;",
                div {
                    h1 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Dashboard" }
                    p {
                        style: "margin: 4px 0 0 0; font-size: 12px; color: {TEXT_MUTED};",
                        "Demo of your AI YouTube automation studio workspace."
                    }
                }
                Link {
                    to: Route::LandingPage {},
                    style: "font-size: 12px; color: {TEXT_SECONDARY}; text-decoration: underline; text-underline-offset: 4px;",
                    "Back to landing"
                }
            }

            section {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px;",
                StatCard { label: "Projects", value: project_count.to_string() }
                StatCard { label: "Videos", value: total_videos().to_string() }
                StatCard { label: "Sample niche", value: "Nursing Home Emotional + Mystery".to_string() }
            }

            section {
                style: "
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                    background-color: {BG_CARD}; padding: 16px;
                    display: flex; flex-direction: column; gap: 12px; font-size: 13px;
                ",
                h2 { style: "margin: 0; font-size: 14px;", "Create a new project" }
                p {
                    style: "margin: 0; font-size: 12px; color: {TEXT_MUTED};",
                    "In the real SaaS, this would set your niche, language, voice style and "
                    "duration defaults. Here we keep it simple for the demo."
                }
                div {
                    style: "display: flex; gap: 12px;",
                    input {
                        value: "{name_input}",
                        placeholder: "Project name (e.g. Abandoned Science Experiments)",
                        style: "
                            flex: 1; padding: 8px 12px; font-size: 12px;
                            background-color: {BG_INPUT}; color: {TEXT_PRIMARY};
                            border: 1px solid {BORDER_STRONG}; border-radius: 8px;
                            outline: none; user-select: text;
                        ",
                        oninput: move |e| name_input.set(e.value()),
                    }
                    input {
                        value: "{niche_input}",
                        placeholder: "Niche description",
                        style: "
                            flex: 1; padding: 8px 12px; font-size: 12px;
                            background-color: {BG_INPUT}; color: {TEXT_PRIMARY};
                            border: 1px solid {BORDER_STRONG}; border-radius: 8px;
                            outline: none; user-select: text;
                        ",
                        oninput: move |e| niche_input.set(e.value()),
                    }
                    button {
                        style: "
                            padding: 8px 16px; border: none; border-radius: 8px;
                            background-color: {ACCENT}; color: {BG_BASE};
                            font-size: 12px; font-weight: 600; cursor: pointer;
                        ",
                        onclick: move |_| create_project(),
                        "Add project"
                    }
                }
            }

            section {
                style: "display: flex; flex-direction: column; gap: 12px;",
                h2 { style: "margin: 0; font-size: 14px;", "Projects" }
                div {
                    style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; font-size: 13px;",
                    for project in projects {
                        Link {
                            key: "{project.id}",
                            to: Route::ProjectPage { project_id: project.id.clone() },
                            class: "project-card",
                            style: "
                                border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                                background-color: {BG_CARD}; padding: 16px;
                                color: {TEXT_PRIMARY}; text-decoration: none;
                            ",
                            div { style: "font-weight: 600;", "{project.name}" }
                            div { style: "margin-top: 4px; font-size: 12px; color: {TEXT_MUTED};", "{project.niche}" }
                            div {
                                style: "margin-top: 8px; font-size: 11px; color: {TEXT_DIM};",
                                "{project.video_count()} video(s) • default {project.default_minutes} min"
                            }
                        }
                    }
                }
            }
        }
    }
}
