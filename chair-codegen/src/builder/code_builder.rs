//! Code builder utility for generating properly indented code.

/// One indent level, as gofmt writes it.
const INDENT: &str = "\t";

/// Line-oriented builder for tab-indented Go source.
///
/// # Example
///
/// ```
/// use chair_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("type User struct {")
///     .push_indent()
///     .push_line("ID int")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "type User struct {\n\tID int\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder with tab indentation.
    pub fn go() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    ///
    /// Trailing whitespace is stripped, as gofmt does.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let s = s.trim_end();
        if !s.is_empty() {
            for _ in 0..self.indent_level {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `//` line comment, one line per line of `text`.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(&format!("// {}", line));
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut builder = CodeBuilder::go();
        builder
            .push_line("import (")
            .push_indent()
            .push_line("\"time\"")
            .push_dedent()
            .push_line(")");

        assert_eq!(builder.build(), "import (\n\t\"time\"\n)\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::go();
        builder.push_dedent().push_line("package model");
        assert_eq!(builder.build(), "package model\n");
    }

    #[test]
    fn test_trailing_whitespace_stripped() {
        let mut builder = CodeBuilder::go();
        builder.push_indent().push_line("ID int    ").push_line("   ").push_blank();
        assert_eq!(builder.build(), "\tID int\n\n\n");
    }

    #[test]
    fn test_multiline_comment() {
        let mut builder = CodeBuilder::go();
        builder.push_indent().push_comment("first\nsecond");
        assert_eq!(builder.build(), "\t// first\n\t// second\n");
    }
}
