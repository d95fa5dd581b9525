//! Layout chrome for the app pages: sidebar, content area, status bar.

use dioxus::prelude::*;

use crate::components::StatusBar;
use crate::constants::*;
use crate::routes::Route;

#[component]
pub fn AppShell() -> Element {
    rsx! {
        div {
            style: "
                display: flex; width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                overflow: hidden;
            ",

            aside {
                style: "
                    display: flex; flex-direction: column;
                    width: {SIDEBAR_WIDTH}px; min-width: {SIDEBAR_WIDTH}px;
                    padding: 24px 16px; gap: 16px;
                    border-right: 1px solid {BORDER_DEFAULT};
                    background-color: {BG_ELEVATED};
                ",
                div {
                    style: "font-size: 17px; font-weight: 600;",
                    span { style: "color: {ACCENT_HOVER};", "AutoTube" }
                    span { " Studio" }
                }
                nav {
                    style: "display: flex; flex-direction: column; gap: 8px; font-size: 13px;",
                    Link {
                        to: Route::DashboardPage {},
                        class: "nav-link",
                        style: "
                            padding: 6px 8px; border-radius: 6px;
                            color: {TEXT_SECONDARY}; text-decoration: none;
                        ",
                        "Dashboard"
                    }
                    Link {
                        to: Route::LandingPage {},
                        class: "nav-link",
                        style: "
                            padding: 6px 8px; border-radius: 6px;
                            color: {TEXT_SECONDARY}; text-decoration: none;
                        ",
                        "Landing"
                    }
                }
                div {
                    style: "margin-top: auto; font-size: 11px; color: {TEXT_DIM};",
                    "Demo UI — no login required."
                }
            }

            div {
                style: "display: flex; flex-direction: column; flex: 1; overflow: hidden;",
                main {
                    style: "flex: 1; overflow-y: auto; padding: 24px 32px;",
                    Outlet::<Route> {}
                }
                StatusBar {}
            }
        }
    }
}
