use dioxus::prelude::*;

use crate::constants::*;
use crate::core::clipboard;

/// A small text button that copies `text` to the system clipboard.
#[component]
pub fn CopyButton(label: &'static str, text: String) -> Element {
    rsx! {
        button {
            class: "copy-btn",
            style: "
                background: transparent; border: none; cursor: pointer;
                font-size: 11px; color: {ACCENT_SOFT}; padding: 0;
            ",
            onclick: move |_| clipboard::copy_text(&text),
            "{label}"
        }
    }
}
