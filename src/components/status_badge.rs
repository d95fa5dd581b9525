use dioxus::prelude::*;

use crate::constants::*;
use crate::state::VideoStatus;

#[component]
pub fn StatusBadge(status: VideoStatus) -> Element {
    let (bg, text) = match status {
        VideoStatus::Ready => (STATUS_READY_BG, STATUS_READY_TEXT),
        VideoStatus::Generating => (STATUS_GENERATING_BG, STATUS_GENERATING_TEXT),
        VideoStatus::Requested => (STATUS_REQUESTED_BG, STATUS_REQUESTED_TEXT),
        VideoStatus::Failed => (STATUS_FAILED_BG, STATUS_FAILED_TEXT),
    };

    rsx! {
        span {
            style: "
                font-size: 11px; padding: 2px 8px; border-radius: 999px;
                background-color: {bg}; color: {text};
            ",
            "{status}"
        }
    }
}
