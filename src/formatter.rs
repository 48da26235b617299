//! Indentation-aware text sink for generated declarations and bodies.
//!
//! Indentation is applied lazily: a line is indented when its first
//! non-empty fragment is written, so blank lines stay empty.
//!
//! ```
//! use hidl_method::formatter::Formatter;
//!
//! let mut out = Formatter::new();
//! out.block("void ping()", |out| {
//!     out.push("return;\n");
//! });
//! assert_eq!(out.as_str(), "void ping() {\n    return;\n}\n");
//! ```

use std::fmt;

pub struct Formatter {
    output: String,
    indent_level: usize,
    indent_string: String,
    at_line_start: bool,
}

impl Formatter {
    /// Create a formatter with 4-space indentation
    pub fn new() -> Self {
        Self::with_indent_spaces(4)
    }

    pub fn with_indent_spaces(spaces: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_string: " ".repeat(spaces),
            at_line_start: true,
        }
    }

    /// Write text, indenting every line that starts inside it
    pub fn push(&mut self, text: &str) -> &mut Self {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.output.push('\n');
                self.at_line_start = true;
            }
            if line.is_empty() {
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.indent_level {
                    self.output.push_str(&self.indent_string);
                }
                self.at_line_start = false;
            }
            self.output.push_str(line);
        }
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.push("\n")
    }

    /// Run `body` one indentation level deeper
    pub fn indent<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.indent_level += 1;
        body(self);
        self.indent_level -= 1;
        self
    }

    /// Write `header {`, the indented body, then `}`
    pub fn block<F>(&mut self, header: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if header.is_empty() {
            self.push("{\n");
        } else {
            self.push(header).push(" {\n");
        }
        self.indent(body);
        self.push("}\n")
    }

    /// Write each item through `each`, separated by `separator`
    pub fn join<I, T, F>(&mut self, items: I, separator: &str, mut each: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            each(self, item);
        }
        self
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for Formatter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s);
        Ok(())
    }
}
