/// Emission plumbing shared by the generators: an indentation-aware string
/// builder, the newline convention, and the final-pass formatting helpers.
///
/// Emission logic always builds LF-only text at indent 0; the base-indent
/// prefix and the newline conversion are applied once, at the end.

/// Indentation-aware string builder for emitting source text.
pub struct CodeWriter {
    buf: String,
    depth: usize,
    tab: String,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::with_tab("  ")
    }

    /// A writer using `tab` as its indent unit.
    pub fn with_tab(tab: &str) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            tab: tab.to_owned(),
        }
    }

    /// Write a line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        self.write_indent();
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write an empty line, with no indentation.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Open a block: write `text {` (or a bare `{`) and increase indent.
    pub fn open(&mut self, text: &str) {
        self.write_indent();
        if !text.is_empty() {
            self.buf.push_str(text);
            self.buf.push(' ');
        }
        self.buf.push_str("{\n");
        self.depth += 1;
    }

    /// Close a block: decrease indent and write `}`.
    pub fn close(&mut self) {
        self.close_with("");
    }

    /// Close a block with a trailing suffix: `}[]`, `},`, `};`.
    pub fn close_with(&mut self, suffix: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.write_indent();
        self.buf.push('}');
        self.buf.push_str(suffix);
        self.buf.push('\n');
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str(&self.tab);
        }
    }
}

/// Newline convention for emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    #[default]
    Lf,
    Crlf,
}

impl Newline {
    /// Normalize `text` to this convention. Input in either convention is
    /// accepted; mixed input comes out uniform.
    pub fn apply(&self, text: &str) -> String {
        let lf = text.replace("\r\n", "\n");
        match self {
            Newline::Lf => lf,
            Newline::Crlf => lf.replace('\n', "\r\n"),
        }
    }
}

/// Prefix every line of `input` with `n` copies of `tab`.
pub fn prepend_tabs(input: &str, n: usize, tab: &str) -> String {
    if input.is_empty() || n == 0 {
        return input.to_owned();
    }
    let prefix = tab.repeat(n);
    let mut out = String::with_capacity(input.len() + prefix.len() * 8);
    for (i, line) in input.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&prefix);
        out.push_str(line);
    }
    out
}

/// Upper-case the first letter of each word. Words are delimited by
/// whitespace, `.`, `_`, or `-`; the non-space delimiters become spaces, so
/// `user_name` reads `User Name` in a label.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() || c == '.' || c == '_' || c == '-' {
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line() {
        let mut w = CodeWriter::new();
        w.line("const x = 1;");
        assert_eq!(w.finish(), "const x = 1;\n");
    }

    #[test]
    fn test_open_close() {
        let mut w = CodeWriter::new();
        w.open("interface A");
        w.line("x: number");
        w.close();
        assert_eq!(w.finish(), "interface A {\n  x: number\n}\n");
    }

    #[test]
    fn test_bare_open() {
        let mut w = CodeWriter::new();
        w.open("");
        w.line("x: 0,");
        w.close_with(";");
        assert_eq!(w.finish(), "{\n  x: 0,\n};\n");
    }

    #[test]
    fn test_close_with_suffix() {
        let mut w = CodeWriter::new();
        w.open("items:");
        w.line("n: number");
        w.close_with("[]");
        assert_eq!(w.finish(), "items: {\n  n: number\n}[]\n");
    }

    #[test]
    fn test_nested_with_custom_tab() {
        let mut w = CodeWriter::with_tab("    ");
        w.open("a:");
        w.open("b:");
        w.line("c: 1,");
        w.close_with(",");
        w.close_with(",");
        assert_eq!(
            w.finish(),
            "a: {\n    b: {\n        c: 1,\n    },\n},\n"
        );
    }

    #[test]
    fn test_prepend_tabs() {
        assert_eq!(prepend_tabs("a\nb", 1, "  "), "  a\n  b");
        assert_eq!(prepend_tabs("a\nb", 2, "\t"), "\t\ta\n\t\tb");
        assert_eq!(prepend_tabs("a", 0, "  "), "a");
        assert_eq!(prepend_tabs("", 3, "  "), "");
    }

    #[test]
    fn test_prepend_tabs_touches_blank_lines() {
        assert_eq!(prepend_tabs("a\n\nb", 1, "  "), "  a\n  \n  b");
    }

    #[test]
    fn test_newline_lf_is_identity_on_lf_text() {
        assert_eq!(Newline::Lf.apply("a\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_newline_crlf_expands_once() {
        assert_eq!(Newline::Crlf.apply("a\nb"), "a\r\nb");
        // Already-CRLF text must not double its carriage returns.
        assert_eq!(Newline::Crlf.apply("a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_newline_lf_collapses_crlf() {
        assert_eq!(Newline::Lf.apply("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("strings"), "Strings");
        assert_eq!(title_case("numberAsString"), "NumberAsString");
        assert_eq!(title_case("user_name"), "User Name");
        assert_eq!(title_case("first name"), "First Name");
        assert_eq!(title_case(""), "");
    }
}
