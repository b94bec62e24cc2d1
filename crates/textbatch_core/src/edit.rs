//! Edit operations and the merge pass that turns an unordered batch into
//! the sorted, non-overlapping list a document applies.

use crate::range::{compare_starts, touches, union, Range};

/// Replace the text covered by `range` with `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOperation {
    pub range: Range,
    pub text: String,
}

impl EditOperation {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// Insert `text` at a single position.
    pub fn insert(range: Range, text: impl Into<String>) -> Self {
        Self::new(Range::collapsed(range.start()), text)
    }

    /// Remove the text covered by `range`.
    pub fn delete(range: Range) -> Self {
        Self::new(range, String::new())
    }
}

/// One or more touching [`EditOperation`]s folded together.
///
/// Only [`merge`] constructs these, so every value is ordered relative to
/// its siblings and never overlaps them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedOperation {
    range: Range,
    text: String,
    sources: usize,
}

impl MergedOperation {
    fn seed(op: EditOperation) -> Self {
        Self {
            range: op.range,
            text: op.text,
            sources: 1,
        }
    }

    fn absorb(&mut self, next: EditOperation) {
        self.range = union(&self.range, &next.range);
        self.text.push_str(next.text.as_str());
        self.sources += 1;
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Number of source operations folded into this one.
    pub fn sources(&self) -> usize {
        self.sources
    }
}

/// Sort `ops` by start and fold runs of exactly touching operations.
///
/// Texts are concatenated in document order. Operations separated by even a
/// single column stay distinct, and overlapping input is left for the
/// document to reject.
pub fn merge(mut ops: Vec<EditOperation>) -> Vec<MergedOperation> {
    let input_len = ops.len();
    // `sort_by` is stable: equal starts keep caller order.
    ops.sort_by(|a, b| compare_starts(&a.range, &b.range));

    let mut sorted = ops.into_iter();
    let Some(first) = sorted.next() else {
        return Vec::new();
    };

    let mut merged = Vec::with_capacity(input_len);
    let mut current = MergedOperation::seed(first);
    for next in sorted {
        if touches(&current.range, &next.range) {
            tracing::trace!("Folding edit {} into {}", next.range, current.range);
            current.absorb(next);
        } else {
            merged.push(current);
            current = MergedOperation::seed(next);
        }
    }
    merged.push(current);

    tracing::debug!(
        input = input_len,
        output = merged.len(),
        "Merged edit batch"
    );
    merged
}
