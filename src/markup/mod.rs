//! Result rendering: interpretation text to display markup.
//!
//! Interpretations arrive in a small Markdown-like dialect (headings, bold,
//! paragraphs, bullet lists). [`render`] turns them into an HTML fragment and its
//! visible text; [`render_error`] builds the failure panel with a retry control.

pub mod escape;
pub mod panel;
pub mod scanner;

pub use escape::escape;
pub use panel::{ErrorPanel, RETRY_ACTION, render_error};
pub use scanner::{Rendered, render};
