//! Source positions attached to declarations for diagnostics

use std::fmt;
use std::rc::Rc;

/// A line/column pair, both 1-based
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

/// Span of a declaration in an input file.
///
/// Synthesized declarations carry an empty location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub file: Option<Rc<str>>,
    pub begin: Position,
    pub end: Position,
}

impl Location {
    pub fn new(file: impl Into<Rc<str>>, begin: Position, end: Position) -> Self {
        Self {
            file: Some(file.into()),
            begin,
            end,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.begin == Position::default() && self.end == Position::default()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<unknown>");
        }
        let file = self.file.as_deref().unwrap_or("<input>");
        write!(f, "{}:{}-{}", file, self.begin, self.end)
    }
}
