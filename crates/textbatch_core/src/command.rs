//! Commands the host executor drives, and the executor itself.

use crate::cursor::{resolve, CursorPlacement, Selection};
use crate::document::{EditableDocument, InverseEditOperation};
use crate::edit::{merge, EditOperation, MergedOperation};
use crate::error::EditError;

/// Two-step edit transaction run by [`execute_command`].
pub trait EditCommand {
    /// Operations to apply, sorted and non-overlapping.
    fn edit_operations(&mut self) -> Vec<MergedOperation>;

    /// Selection after the operations from [`Self::edit_operations`] applied.
    fn compute_cursor_state(
        &self,
        inverse_ops: &[InverseEditOperation],
    ) -> Result<Selection, EditError>;
}

/// Fixed batch of raw edits plus the placement policy for the cursor.
#[derive(Clone, Debug)]
pub struct CommandRunner {
    ops: Vec<EditOperation>,
    placement: CursorPlacement,
}

impl CommandRunner {
    pub fn new(ops: Vec<EditOperation>, placement: CursorPlacement) -> Self {
        Self { ops, placement }
    }

    pub fn placement(&self) -> CursorPlacement {
        self.placement
    }

    /// True when the command would not touch the document.
    pub fn is_noop(&self) -> bool {
        self.ops.is_empty()
    }

    /// Merged operations for the stored batch; empty for an empty batch.
    pub fn produce_operations(&self) -> Vec<MergedOperation> {
        merge(self.ops.clone())
    }

    /// Selection derived from `inverse_ops` with the stored placement.
    pub fn compute_resulting_selection(
        &self,
        inverse_ops: &[InverseEditOperation],
    ) -> Result<Selection, EditError> {
        resolve(inverse_ops, self.placement)
    }
}

impl EditCommand for CommandRunner {
    fn edit_operations(&mut self) -> Vec<MergedOperation> {
        self.produce_operations()
    }

    fn compute_cursor_state(
        &self,
        inverse_ops: &[InverseEditOperation],
    ) -> Result<Selection, EditError> {
        self.compute_resulting_selection(inverse_ops)
    }
}

/// Apply `command` to `document` as one transaction.
///
/// Returns `Ok(None)` when the command produced no operations; the document
/// is left untouched and no cursor is computed. Document errors propagate
/// unchanged and leave the document as it was.
pub fn execute_command<D>(
    document: &mut D,
    command: &mut dyn EditCommand,
) -> Result<Option<Selection>, EditError>
where
    D: EditableDocument + ?Sized,
{
    let ops = command.edit_operations();
    if ops.is_empty() {
        tracing::debug!("Command produced no edit operations");
        return Ok(None);
    }
    let inverse_ops = document.apply_edits(&ops)?;
    command.compute_cursor_state(&inverse_ops).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RopeDocument;
    use crate::range::{Position, Range};

    #[test]
    fn empty_runner_is_a_noop() {
        let mut doc = RopeDocument::new("abc");
        let mut runner = CommandRunner::new(Vec::new(), CursorPlacement::EndOfLastEditOperation);
        assert!(runner.is_noop());
        assert!(runner.produce_operations().is_empty());
        let outcome = execute_command(&mut doc, &mut runner).expect("execute");
        assert_eq!(outcome, None);
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn insert_places_cursor_after_inserted_text() {
        let mut doc = RopeDocument::new("first\n\nthird");
        let mut runner = CommandRunner::new(
            vec![EditOperation::new(Range::new(2, 1, 2, 1), "hi")],
            CursorPlacement::EndOfLastEditOperation,
        );
        let selection = execute_command(&mut doc, &mut runner)
            .expect("execute")
            .expect("selection");
        assert_eq!(selection, Selection::collapsed(Position::new(2, 3)));
        assert_eq!(doc.text(), "first\nhi\nthird");
    }

    #[test]
    fn invalid_batch_propagates_and_keeps_document() {
        let mut doc = RopeDocument::new("abc");
        let mut runner = CommandRunner::new(
            vec![EditOperation::new(Range::new(3, 1, 3, 2), "x")],
            CursorPlacement::default(),
        );
        let err = execute_command(&mut doc, &mut runner).expect_err("invalid line");
        assert!(matches!(err, EditError::InvalidRange { .. }));
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn compute_resulting_selection_rejects_empty_inverse() {
        let runner = CommandRunner::new(Vec::new(), CursorPlacement::default());
        assert!(matches!(
            runner.compute_resulting_selection(&[]),
            Err(EditError::EmptyResult)
        ));
    }
}
