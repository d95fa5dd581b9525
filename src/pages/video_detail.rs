//! Video detail page: SEO metadata, chapters, and the generated script.

use dioxus::prelude::*;

use crate::components::CopyButton;
use crate::constants::*;
use crate::routes::Route;
use crate::state::Studio;

#[component]
pub fn VideoDetailPage(project_id: String, video_id: String) -> Element {
    let studio = use_context::<Signal<Studio>>();
    let nav = navigator();

    // One projection per render; unknown pairs come back as the generic
    // placeholder record.
    let detail = studio.read().video_detail(&project_id, &video_id);
    let tags_joined = detail.tags.join(", ");
    let back_project_id = project_id.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px; max-width: 1100px;",

            header {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px;",
                div {
                    h1 { style: "margin: 0; font-size: 22px; font-weight: 600;", "{detail.title}" }
                    p {
                        style: "margin: 4px 0 0 0; font-size: 12px; color: {TEXT_MUTED};",
                        "Status: {detail.status} • {detail.minutes} minutes • ID: {detail.id}"
                    }
                }
                button {
                    style: "
                        padding: 6px 14px; border-radius: 999px;
                        border: 1px solid {BORDER_STRONG}; background: transparent;
                        color: {TEXT_SECONDARY}; font-size: 12px; cursor: pointer;
                    ",
                    onclick: move |_| {
                        nav.push(Route::ProjectPage {
                            project_id: back_project_id.clone(),
                        });
                    },
                    "Back to project"
                }
            }

            section {
                style: "display: grid; grid-template-columns: 1.4fr 1.6fr; gap: 16px;",

                // SEO column
                div {
                    style: "display: flex; flex-direction: column; gap: 12px; font-size: 12px;",

                    div {
                        style: "
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                            background-color: {BG_CARD}; padding: 12px;
                            display: flex; flex-direction: column; gap: 8px;
                        ",
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between;",
                            span { style: "font-size: 13px; font-weight: 600;", "Title" }
                            CopyButton { label: "Copy", text: detail.title.clone() }
                        }
                        p { style: "margin: 0;", "{detail.title}" }
                    }

                    div {
                        style: "
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                            background-color: {BG_CARD}; padding: 12px;
                            display: flex; flex-direction: column; gap: 8px;
                        ",
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between;",
                            span { style: "font-size: 13px; font-weight: 600;", "Description" }
                            CopyButton { label: "Copy", text: detail.description.clone() }
                        }
                        p {
                            style: "margin: 0; white-space: pre-wrap; max-height: 160px; overflow-y: auto;",
                            "{detail.description}"
                        }
                    }

                    div {
                        style: "
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                            background-color: {BG_CARD}; padding: 12px;
                            display: flex; flex-direction: column; gap: 8px;
                        ",
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between;",
                            span { style: "font-size: 13px; font-weight: 600;", "Tags" }
                            CopyButton { label: "Copy all", text: tags_joined }
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 4px;",
                            for tag in detail.tags.clone() {
                                span {
                                    key: "{tag}",
                                    style: "
                                        padding: 2px 8px; border-radius: 999px;
                                        background-color: {BG_CHIP}; font-size: 11px;
                                    ",
                                    "{tag}"
                                }
                            }
                        }
                    }

                    div {
                        style: "
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                            background-color: {BG_CARD}; padding: 12px;
                            display: flex; flex-direction: column; gap: 8px;
                        ",
                        span { style: "font-size: 13px; font-weight: 600;", "Chapters" }
                        ul {
                            style: "margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 4px;",
                            for chapter in detail.chapters.clone() {
                                li {
                                    key: "{chapter.title}-{chapter.time}",
                                    style: "display: flex; align-items: center; justify-content: space-between;",
                                    span { "{chapter.title}" }
                                    span { style: "font-size: 11px; color: {TEXT_MUTED};", "{chapter.time}" }
                                }
                            }
                        }
                    }
                }

                // Script column
                div {
                    style: "display: flex; flex-direction: column; gap: 8px; font-size: 12px;",
                    div {
                        style: "display: flex; align-items: center; justify-content: space-between;",
                        h2 { style: "margin: 0; font-size: 14px;", "Script (demo)" }
                        CopyButton { label: "Copy script", text: detail.script.clone() }
                    }
                    div {
                        style: "
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                            background-color: {BG_INPUT}; padding: 12px;
                            max-height: 320px; overflow-y: auto;
                        ",
                        pre {
                            style: "margin: 0; white-space: pre-wrap; font-size: 11px; line-height: 1.6; font-family: inherit; user-select: text;",
                            "{detail.script}"
                        }
                    }
                    div {
                        style: "
                            border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                            background-color: {BG_CARD}; padding: 12px;
                            font-size: 11px; color: {TEXT_MUTED};
                            display: flex; flex-direction: column; gap: 4px;
                        ",
                        p { style: "margin: 0;", "In the full SaaS, this page would also show:" }
                        ul {
                            style: "margin: 0; padding-left: 16px; display: flex; flex-direction: column; gap: 4px;",
                            li { "Generated thumbnail images" }
                            li { "Extra B-roll frames" }
                            li { "Voiceover MP3 player + download" }
                            li { "Download all assets as ZIP" }
                        }
                        p {
                            style: "margin: 4px 0 0 0;",
                            "Here we keep it desktop-only so it runs locally with no database or API keys required."
                        }
                    }
                }
            }
        }
    }
}
