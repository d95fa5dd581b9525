//! Marketing landing page. Static content only.

use dioxus::prelude::*;

use crate::constants::*;
use crate::routes::Route;

const FEATURES: [(&str, &str); 3] = [
    (
        "Script engine",
        "Cinematic long-form scripts based on your niche and duration.",
    ),
    (
        "Visual package",
        "Thumbnail & B-roll slots to plug in AI image outputs.",
    ),
    (
        "Voice & SEO",
        "Voiceover sections, titles, descriptions, tags & chapters.",
    ),
];

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        main {
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh; overflow-y: auto;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
            ",

            header {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    padding: 16px 24px; border-bottom: 1px solid {BORDER_DEFAULT};
                    background-color: {BG_ELEVATED};
                ",
                div {
                    style: "font-size: 18px; font-weight: 600; letter-spacing: -0.2px;",
                    span { style: "color: {ACCENT_HOVER};", "AutoTube" }
                    span { " Studio" }
                }
                Link {
                    to: Route::DashboardPage {},
                    style: "
                        padding: 6px 14px; border-radius: 999px;
                        border: 1px solid {BORDER_STRONG};
                        color: {TEXT_SECONDARY}; font-size: 13px; text-decoration: none;
                    ",
                    "Dashboard demo"
                }
            }

            section {
                style: "
                    flex: 1; display: flex; flex-direction: column;
                    align-items: center; justify-content: center;
                    padding: 40px 16px;
                ",
                div {
                    style: "max-width: 680px; text-align: center; display: flex; flex-direction: column; gap: 24px;",
                    h1 {
                        style: "margin: 0; font-size: 42px; font-weight: 600; letter-spacing: -0.5px; line-height: 1.15;",
                        "Type a title."
                        span {
                            style: "display: block; color: {ACCENT_HOVER};",
                            "Get a full YouTube video package."
                        }
                    }
                    p {
                        style: "margin: 0; font-size: 16px; color: {TEXT_SECONDARY};",
                        "AutoTube Studio simulates an AI pipeline that turns your niche and "
                        "title into scripts, thumbnails, B-roll frames, voiceover sections "
                        "and SEO — ready to upload to your automation channels."
                    }
                    div {
                        Link {
                            to: Route::DashboardPage {},
                            style: "
                                display: inline-block; padding: 12px 24px; border-radius: 999px;
                                background-color: {ACCENT}; color: {BG_BASE};
                                font-size: 14px; font-weight: 500; text-decoration: none;
                            ",
                            "Open dashboard demo"
                        }
                    }
                }

                div {
                    style: "
                        display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px;
                        max-width: 960px; width: 100%; margin-top: 56px; font-size: 13px;
                    ",
                    for (title, desc) in FEATURES {
                        div {
                            style: "
                                border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                                background-color: {BG_CARD}; padding: 16px;
                            ",
                            h3 { style: "margin: 0 0 6px 0; font-size: 14px;", "{title}" }
                            p { style: "margin: 0; color: {TEXT_SECONDARY}; font-size: 12px;", "{desc}" }
                        }
                    }
                }
            }
        }
    }
}
