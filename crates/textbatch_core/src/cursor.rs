//! Cursor placement after an edit batch has been applied.

use crate::document::InverseEditOperation;
use crate::error::EditError;
use crate::range::{Position, Range};
use serde::{Deserialize, Serialize};

/// How to derive the resulting cursor from a batch's inverse operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorPlacement {
    /// Collapse the cursor at the end of the last applied operation.
    #[default]
    EndOfLastEditOperation,
}

/// A selection between an anchor and the active (caret) position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Zero-width selection at `position`.
    pub fn collapsed(position: Position) -> Self {
        Self::new(position, position)
    }

    /// True when anchor and caret coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Normalized range covered by the selection.
    pub fn range(&self) -> Range {
        Range::from_positions(self.anchor, self.active)
    }
}

/// Compute the selection that follows an applied batch.
///
/// `inverse_ops` must be in application order. An empty slice means the
/// command made no edits and has no meaningful cursor.
pub fn resolve(
    inverse_ops: &[InverseEditOperation],
    placement: CursorPlacement,
) -> Result<Selection, EditError> {
    match placement {
        CursorPlacement::EndOfLastEditOperation => {
            let last = inverse_ops.last().ok_or(EditError::EmptyResult)?;
            Ok(Selection::collapsed(last.range.end()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inverse(end_line: usize, end_col: usize) -> InverseEditOperation {
        InverseEditOperation {
            range: Range::new(1, 1, end_line, end_col),
            text: String::new(),
        }
    }

    #[test]
    fn last_inverse_operation_governs() {
        let selection = resolve(
            &[inverse(3, 5), inverse(4, 1)],
            CursorPlacement::EndOfLastEditOperation,
        )
        .expect("selection");
        assert!(selection.is_empty());
        assert_eq!(selection.active, Position::new(4, 1));
    }

    #[test]
    fn last_wins_even_when_earlier_in_document() {
        let selection = resolve(
            &[inverse(9, 9), inverse(2, 2)],
            CursorPlacement::EndOfLastEditOperation,
        )
        .expect("selection");
        assert_eq!(selection, Selection::collapsed(Position::new(2, 2)));
    }

    #[test]
    fn empty_inverse_list_is_an_error() {
        let err = resolve(&[], CursorPlacement::EndOfLastEditOperation)
            .expect_err("empty batch has no cursor");
        assert!(matches!(err, EditError::EmptyResult));
    }

    #[test]
    fn selection_range_normalizes_direction() {
        let selection = Selection::new(Position::new(5, 1), Position::new(2, 3));
        assert_eq!(selection.range(), Range::new(2, 3, 5, 1));
    }
}
