//! Root application component
//!
//! Provides the session store to every page and mounts the router.

use dioxus::prelude::*;

use crate::constants::*;
use crate::routes::Route;
use crate::state::Studio;

#[component]
pub fn App() -> Element {
    // The session-scoped store. Every page reads and mutates this one
    // instance through context, so edits survive navigation.
    use_context_provider(|| Signal::new(Studio::seeded()));

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .nav-link {{ transition: background-color 0.15s ease, color 0.15s ease; }}
            .nav-link:hover {{ background-color: {BG_HOVER}; color: {TEXT_PRIMARY}; }}
            .project-card {{ transition: border-color 0.15s ease; }}
            .project-card:hover {{ border-color: {ACCENT_HOVER} !important; }}
            .copy-btn:hover {{ color: {ACCENT_HOVER}; }}
            input::placeholder {{ color: {TEXT_DIM}; }}
            "#
        }

        div {
            style: "
                width: 100vw; height: 100vh; overflow: hidden;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                user-select: none;
            ",
            Router::<Route> {}
        }
    }
}
