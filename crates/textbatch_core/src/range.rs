//! Line/column positions and ranges, plus the ordering helpers used to
//! normalize edit batches.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A 1-based `(line, column)` location in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An immutable span `[start, end]` with `end >= start` in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    start_line: usize,
    start_col: usize,
    end_line: usize,
    end_col: usize,
}

impl Range {
    /// Build a range, swapping the endpoints if they arrive reversed.
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self::from_positions(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        )
    }

    /// Build a range from two positions in either order.
    pub fn from_positions(a: Position, b: Position) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self {
            start_line: start.line,
            start_col: start.column,
            end_line: end.line,
            end_col: end.column,
        }
    }

    /// Empty range at a single position.
    pub fn collapsed(at: Position) -> Self {
        Self::from_positions(at, at)
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn end_line(&self) -> usize {
        self.end_line
    }

    pub fn end_col(&self) -> usize {
        self.end_col
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_col)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_col)
    }

    /// True when the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    /// True when `position` lies within the range, both edges inclusive.
    pub fn contains_position(&self, position: Position) -> bool {
        self.start() <= position && position <= self.end()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.start(), self.end())
    }
}

/// Order two ranges by their start position only.
///
/// Ranges with equal starts compare `Equal`, so a stable sort keeps them in
/// input order.
pub fn compare_starts(a: &Range, b: &Range) -> Ordering {
    a.start_line
        .cmp(&b.start_line)
        .then(a.start_col.cmp(&b.start_col))
}

/// Smallest range spanning both `a` and `b`.
///
/// Callers merging edits must only pass ranges that touch or overlap; a gap
/// between them would be absorbed into the result.
pub fn union(a: &Range, b: &Range) -> Range {
    Range::from_positions(a.start().min(b.start()), a.end().max(b.end()))
}

/// True iff `a` ends exactly where `b` begins.
pub fn touches(a: &Range, b: &Range) -> bool {
    a.end_line == b.start_line && a.end_col == b.start_col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_swaps_reversed_endpoints() {
        let range = Range::new(4, 2, 1, 7);
        assert_eq!(range.start(), Position::new(1, 7));
        assert_eq!(range.end(), Position::new(4, 2));
    }

    #[test]
    fn compare_starts_ignores_range_end() {
        let short = Range::new(2, 3, 2, 4);
        let long = Range::new(2, 3, 9, 1);
        assert_eq!(compare_starts(&short, &long), Ordering::Equal);
        assert_eq!(
            compare_starts(&Range::new(1, 9, 1, 9), &short),
            Ordering::Less
        );
        assert_eq!(
            compare_starts(&Range::new(2, 5, 2, 5), &short),
            Ordering::Greater
        );
    }

    #[test]
    fn union_spans_min_start_and_max_end() {
        let a = Range::new(1, 1, 1, 3);
        let b = Range::new(1, 3, 2, 1);
        assert_eq!(union(&a, &b), Range::new(1, 1, 2, 1));
        assert_eq!(union(&b, &a), Range::new(1, 1, 2, 1));
    }

    #[test]
    fn touches_requires_exact_adjacency() {
        let a = Range::new(1, 1, 1, 3);
        assert!(touches(&a, &Range::new(1, 3, 1, 5)));
        assert!(!touches(&a, &Range::new(1, 4, 1, 5)));
        assert!(!touches(&a, &Range::new(1, 2, 1, 5)));
        assert!(!touches(&Range::new(1, 3, 1, 5), &a));
    }

    #[test]
    fn contains_position_is_inclusive() {
        let range = Range::new(2, 2, 3, 1);
        assert!(range.contains_position(Position::new(2, 2)));
        assert!(range.contains_position(Position::new(2, 40)));
        assert!(range.contains_position(Position::new(3, 1)));
        assert!(!range.contains_position(Position::new(3, 2)));
        assert!(Range::collapsed(Position::new(5, 5)).is_empty());
    }
}
