//! Data types for sharing results.

use crate::util::truncate_chars;
use thiserror::Error;

/// Number of characters of the rendered result included in shared text.
pub const SHARE_EXCERPT_CHARS: usize = 300;

/// Marker appended after the excerpt.
pub const TRUNCATION_MARKER: &str = "...";

/// Mechanism that delivered a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareProvider {
    /// Share-target picker of the host application
    HostIntegrated,
    /// Native share capability of the runtime
    GenericNative,
    /// Text copied to the clipboard, user notified
    ClipboardFallback,
}

/// Errors that can occur while sharing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// Host share attempt failed; recovered by falling back
    #[error("Host share unavailable: {0}")]
    Unavailable(String),

    #[error("Native share failed: {0}")]
    Native(String),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),
}

/// Builds the text shared for a result.
///
/// Always: label, question, the first [`SHARE_EXCERPT_CHARS`] characters of the
/// result's plain text, and [`TRUNCATION_MARKER`].
pub fn share_text(label: &str, question: &str, plain_text: &str) -> String {
    format!(
        "{label}\n\nQuestion: {question}\n\n{}{TRUNCATION_MARKER}",
        truncate_chars(plain_text, SHARE_EXCERPT_CHARS)
    )
}
