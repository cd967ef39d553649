//! HTML escaping and inline span rendering.

/// Appends `text` to `out` with HTML special characters escaped.
pub fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Returns `text` with HTML special characters escaped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Renders inline spans of one line.
///
/// `**bold**` pairs become `<strong>` elements; an unmatched `**` is kept
/// literally. Appends markup to `markup` and the visible text to `plain`.
pub fn render_inline(line: &str, markup: &mut String, plain: &mut String) {
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        let before = &rest[..open];
        let inner = &after_open[..close];
        escape_into(markup, before);
        plain.push_str(before);

        markup.push_str("<strong>");
        escape_into(markup, inner);
        markup.push_str("</strong>");
        plain.push_str(inner);

        rest = &after_open[close + 2..];
    }
    escape_into(markup, rest);
    plain.push_str(rest);
}
