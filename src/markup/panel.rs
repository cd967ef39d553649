//! Failure panel shown in place of an interpretation.

use super::escape::escape;

/// Action identifier carried by the retry control.
pub const RETRY_ACTION: &str = "retry";

/// Fixed-layout failure panel with a retry control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    /// Message as reported by the interpretation client
    pub message: String,
    /// Display markup of the panel
    pub markup: String,
}

/// Builds the failure panel for `message`.
///
/// The retry control carries `data-action="retry"`; activating it re-runs the
/// same submission.
pub fn render_error(message: &str) -> ErrorPanel {
    let markup = format!(
        concat!(
            "<div class=\"error-panel\">",
            "<p class=\"error-title\">😔 Something went wrong while reading your character</p>",
            "<p class=\"error-message\">{}</p>",
            "<button type=\"button\" class=\"secondary-btn\" data-action=\"{}\">Try again</button>",
            "</div>"
        ),
        escape(message),
        RETRY_ACTION
    );
    ErrorPanel {
        message: message.to_string(),
        markup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_contains_message_and_retry_control() {
        let panel = render_error("x");
        assert!(panel.markup.contains("<p class=\"error-message\">x</p>"));
        assert!(panel.markup.contains("data-action=\"retry\""));
        assert!(panel.markup.contains("<button"));
        assert_eq!(panel.message, "x");
    }

    #[test]
    fn panel_message_is_escaped() {
        let panel = render_error("<b>boom</b>");
        assert!(panel.markup.contains("&lt;b&gt;boom&lt;/b&gt;"));
        assert!(!panel.markup.contains("<b>"));
    }
}
