//! C++ code emitter - builds C++ source code strings
//!
//! Append-only buffer with indentation tracking. Callers that open a level must close it; the codegen pass does this
//! through closure helpers so error paths unwind the depth as well.

use std::fmt::Write;

/// A buffer for building C++ source code with proper indentation
#[derive(Debug)]
pub struct CppEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: String,
}

impl Default for CppEmitter {
    fn default() -> Self {
        Self::new(4)
    }
}

impl CppEmitter {
    /// Create an emitter that indents by `indent_width` spaces per level.
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: " ".repeat(indent_width),
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.indent_level
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write formatted text as an indented line
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a Doxygen brief comment
    pub fn doc_comment(&mut self, text: &str) {
        self.linef(format_args!("/** @brief {text} */"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_indent() {
        let mut e = CppEmitter::new(2);
        e.line("struct A {");
        e.indent();
        e.line("int x;");
        e.dedent();
        e.line("};");
        assert_eq!(e.finish(), "struct A {\n  int x;\n};\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut e = CppEmitter::default();
        e.dedent();
        assert_eq!(e.depth(), 0);
        e.indent();
        e.doc_comment("main");
        assert_eq!(e.as_str(), "    /** @brief main */\n");
    }

    #[test]
    fn test_linef_and_blank_line() {
        let mut e = CppEmitter::new(2);
        e.indent();
        e.linef(format_args!("{} {};", "int", "x"));
        e.blank_line();
        assert_eq!(e.finish(), "  int x;\n\n");
    }
}
