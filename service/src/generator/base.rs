//! Formatting helpers shared by generators

/// Base code formatter with common functionality
pub struct BaseCodeFormatter;

impl BaseCodeFormatter {
    /// Escape a string for a JavaScript/TypeScript double-quoted literal
    #[must_use]
    pub fn escape_js_string(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\0' => out.push_str("\\0"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                c => out.push(c),
            }
        }
        out
    }

    /// Double-quoted string literal
    #[must_use]
    pub fn quote(s: &str) -> String {
        format!("\"{}\"", Self::escape_js_string(s))
    }

    /// Wrap text to a specific line width
    ///
    /// Whitespace runs, including newlines, collapse to single spaces.
    #[must_use]
    pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current_line = String::new();

        for word in text.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
        lines
    }

    /// `/** ... */` block at the given indent, `None` for blank text
    #[must_use]
    pub fn doc_comment(text: &str, indent: &str) -> Option<String> {
        let text = text.replace("*/", "*\\/");
        let lines = Self::wrap_text(&text, 76usize.saturating_sub(indent.len()));
        if lines.is_empty() {
            return None;
        }

        let mut block = format!("{indent}/**\n");
        for line in lines {
            block.push_str(&format!("{indent} * {line}\n"));
        }
        block.push_str(&format!("{indent} */\n"));
        Some(block)
    }
}
