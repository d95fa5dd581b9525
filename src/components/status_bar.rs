use dioxus::prelude::*;

use crate::constants::*;
use crate::state::Studio;
use crate::utils::format_session_clock;

#[component]
pub fn StatusBar() -> Element {
    let studio = use_context::<Signal<Studio>>();
    let session_seconds = use_signal(|| 0_u64);

    use_future(move || {
        let mut session_seconds = session_seconds.clone();
        async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                session_seconds.set(session_seconds() + 1);
            }
        }
    });

    let project_count = studio.read().list().len();
    let video_count = studio.read().total_videos();
    let clock = format_session_clock(session_seconds());

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {STATUS_BAR_HEIGHT}px; padding: 0 14px;
                background-color: {BG_ELEVATED}; border-top: 1px solid {BORDER_DEFAULT};
                font-size: 11px; color: {TEXT_DIM};
            ",
            span { "Ready" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{project_count} project(s)" }
                span { "{video_count} video(s)" }
                span { "{clock}" }
            }
        }
    }
}
