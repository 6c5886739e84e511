//! System clipboard access for charm text values.
//!
//! Self-contained wrapper around `arboard`; no coupling to UI or
//! application state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is available (e.g. headless session).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Copy text to the system clipboard.
///
/// Uses `arboard` to reach the OS clipboard (NSPasteboard on macOS,
/// X11/Wayland on Linux).
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert!(format!("{err}").contains("no display"));
    }
}
