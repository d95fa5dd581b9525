use dioxus::prelude::*;

use crate::constants::*;

#[component]
pub fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "
                border: 1px solid {BORDER_DEFAULT}; border-radius: 16px;
                background-color: {BG_CARD}; padding: 16px;
            ",
            div {
                style: "font-size: 11px; text-transform: uppercase; letter-spacing: 0.5px; color: {TEXT_MUTED};",
                "{label}"
            }
            div {
                style: "margin-top: 4px; font-size: 20px; font-weight: 600;",
                "{value}"
            }
        }
    }
}
