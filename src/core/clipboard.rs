//! System clipboard access for the copy buttons.

use arboard::Clipboard;

/// Write text to the system clipboard. Failures are logged to stdout and
/// never surfaced to the user; the demo has no error UI.
pub fn copy_text(text: &str) {
    if let Err(err) = try_copy(text) {
        println!("Failed to copy to clipboard: {}", err);
    }
}

fn try_copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
