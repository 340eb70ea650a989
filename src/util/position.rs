use std::fmt;

/// A 1-based location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number (in bytes from the start of the line), starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    ///
    /// ## Example
    /// ```
    /// use pascalette::util::position::Position;
    ///
    /// let pos = Position::new(3, 14);
    /// assert_eq!(pos.to_string(), "line 3, column 14");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
