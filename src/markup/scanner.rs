//! Line scanner converting the interpretation dialect to markup.
//!
//! Supported dialect:
//! - `### ` / `## ` line prefixes: heading
//! - `**text**`: strong emphasis
//! - blank line: paragraph boundary
//! - `- ` line prefix: list item; consecutive items share one list
//! - single newline inside a paragraph: line break
//!
//! Anything else is treated as paragraph text. All text is escaped, so the
//! only elements in the output are the ones listed above.

use super::escape::render_inline;

/// Rendered interpretation: display markup plus its visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// HTML fragment (`h3`, `p`, `br`, `strong`, `ul`, `li` only)
    pub markup: String,
    /// Visible text, one block per line
    pub plain_text: String,
}

/// Block the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    /// Between blocks
    Normal,
    /// Inside an open `<p>`
    Paragraph,
    /// Inside an open `<ul>`
    List,
}

struct Scanner {
    block: Block,
    markup: String,
    plain_blocks: Vec<String>,
    plain_current: String,
}

impl Scanner {
    fn new() -> Self {
        Self {
            block: Block::Normal,
            markup: String::new(),
            plain_blocks: Vec::new(),
            plain_current: String::new(),
        }
    }

    fn line(&mut self, raw: &str) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim().is_empty() {
            self.close();
            return;
        }

        if let Some(title) = line
            .strip_prefix("### ")
            .or_else(|| line.strip_prefix("## "))
        {
            self.heading(title);
            return;
        }

        if let Some(item) = line.strip_prefix("- ") {
            self.list_item(item);
            return;
        }

        self.paragraph_line(line);
    }

    fn heading(&mut self, title: &str) {
        self.close();
        self.markup.push_str("<h3>");
        render_inline(title.trim(), &mut self.markup, &mut self.plain_current);
        self.markup.push_str("</h3>");
        self.finish_plain();
    }

    fn list_item(&mut self, item: &str) {
        if self.block != Block::List {
            self.close();
            self.markup.push_str("<ul>");
            self.block = Block::List;
        } else {
            self.plain_current.push('\n');
        }
        self.markup.push_str("<li>");
        render_inline(item, &mut self.markup, &mut self.plain_current);
        self.markup.push_str("</li>");
    }

    fn paragraph_line(&mut self, line: &str) {
        match self.block {
            Block::Paragraph => {
                self.markup.push_str("<br>");
                self.plain_current.push('\n');
            }
            Block::List | Block::Normal => {
                self.close();
                self.markup.push_str("<p>");
                self.block = Block::Paragraph;
            }
        }
        render_inline(line, &mut self.markup, &mut self.plain_current);
    }

    fn close(&mut self) {
        match self.block {
            Block::Normal => return,
            Block::Paragraph => self.markup.push_str("</p>"),
            Block::List => self.markup.push_str("</ul>"),
        }
        self.block = Block::Normal;
        self.finish_plain();
    }

    fn finish_plain(&mut self) {
        let block = std::mem::take(&mut self.plain_current);
        self.plain_blocks.push(block);
    }

    fn finish(mut self) -> Rendered {
        self.close();
        Rendered {
            markup: self.markup,
            plain_text: self.plain_blocks.join("\n"),
        }
    }
}

/// Converts interpretation text to markup.
///
/// Best effort and non-validating: any input produces well-formed markup.
pub fn render(text: &str) -> Rendered {
    let mut scanner = Scanner::new();
    for line in text.split('\n') {
        scanner.line(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading_bold_and_coalesced_list() {
        let rendered = render("### Title\n\n**bold** text\n- a\n- b");
        assert_eq!(
            rendered.markup,
            "<h3>Title</h3><p><strong>bold</strong> text</p><ul><li>a</li><li>b</li></ul>"
        );
        assert_eq!(rendered.markup.matches("<h3>").count(), 1);
        assert_eq!(rendered.markup.matches("<ul>").count(), 1);
        assert_eq!(rendered.markup.matches("<li>").count(), 2);
        assert_eq!(rendered.plain_text, "Title\nbold text\na\nb");
    }

    #[test]
    fn double_hash_is_also_a_heading() {
        assert_eq!(render("## Omen").markup, "<h3>Omen</h3>");
    }

    #[test]
    fn single_newlines_become_breaks_and_blank_lines_paragraphs() {
        let rendered = render("one\ntwo\n\nthree");
        assert_eq!(rendered.markup, "<p>one<br>two</p><p>three</p>");
        assert_eq!(rendered.plain_text, "one\ntwo\nthree");
    }

    #[test]
    fn lists_separated_by_text_stay_separate() {
        let rendered = render("- a\nmiddle\n- b");
        assert_eq!(
            rendered.markup,
            "<ul><li>a</li></ul><p>middle</p><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn list_directly_after_paragraph_is_not_nested() {
        let rendered = render("intro\n- a\n- **b**");
        assert_eq!(
            rendered.markup,
            "<p>intro</p><ul><li>a</li><li><strong>b</strong></li></ul>"
        );
        assert!(!rendered.markup.contains("<p><ul>"));
    }

    #[test]
    fn injected_markup_is_escaped() {
        let rendered = render("<img src=x onerror=alert(1)>\n- </ul><script>");
        assert!(!rendered.markup.contains("<img"));
        assert!(!rendered.markup.contains("<script>"));
        assert!(rendered.markup.contains("&lt;/ul&gt;&lt;script&gt;"));
        assert_eq!(rendered.markup.matches("</ul>").count(), 1);
    }

    #[test]
    fn empty_and_blank_input_produce_nothing() {
        assert_eq!(render(""), Rendered::default());
        assert_eq!(render("\n\n  \n").markup, "");
    }

    #[test]
    fn windows_line_endings_are_tolerated() {
        let rendered = render("### T\r\n\r\nbody\r\n");
        assert_eq!(rendered.markup, "<h3>T</h3><p>body</p>");
    }

    #[test]
    fn heading_marker_without_space_is_plain_text() {
        assert_eq!(render("###Title").markup, "<p>###Title</p>");
    }
}
