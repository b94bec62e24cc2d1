//! The host buffer contract and a rope-backed reference document.

use crate::edit::MergedOperation;
use crate::error::EditError;
use crate::range::{Position, Range};
use ropey::Rope;

/// Post-application record for one applied operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InverseEditOperation {
    /// Range in the edited document now holding the operation's text.
    pub range: Range,
    /// Text the operation replaced.
    pub text: String,
}

/// Buffer operations the edit core depends on.
pub trait EditableDocument {
    /// Number of lines, at least 1.
    fn line_count(&self) -> usize;

    /// Content of a 1-based line without its terminator.
    fn line_content(&self, line: usize) -> String;

    /// Clamp a raw position into the document bounds.
    fn validate_position(&self, raw: Position) -> Position;

    /// Clamp both endpoints; a reversed raw range is rejected.
    fn validate_range(&self, start: Position, end: Position) -> Result<Range, EditError>;

    /// Apply all operations atomically, in the given order.
    ///
    /// Returns one inverse operation per input operation, in input order.
    /// Any invalid or overlapping range rejects the whole batch before
    /// anything is mutated.
    fn apply_edits(
        &mut self,
        ops: &[MergedOperation],
    ) -> Result<Vec<InverseEditOperation>, EditError>;
}

fn line_for_char(rope: &Rope, char_index: usize) -> usize {
    rope.char_to_line(char_index.min(rope.len_chars()))
}

struct ResolvedEdit<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

/// Rope-backed document used by the editor and the CLI.
#[derive(Clone, Debug, Default)]
pub struct RopeDocument {
    rope: Rope,
    revision: u64,
    char_len: usize,
}

impl RopeDocument {
    /// Create a document from UTF-8 text.
    pub fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let char_len = rope.len_chars();
        Self {
            rope,
            revision: 0,
            char_len,
        }
    }

    /// Number of applied edit batches.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Content length in characters.
    pub fn len_chars(&self) -> usize {
        self.char_len
    }

    /// UTF-8 snapshot of the whole document.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole content, resetting the revision.
    pub fn reset(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.char_len = self.rope.len_chars();
        self.revision = 0;
    }

    /// Character length of a 0-based line without its `\r\n`, `\n` or `\r`
    /// terminator. Only those break lines in the rope.
    fn line_len_chars(&self, line: usize) -> usize {
        if line >= self.line_count() {
            return 0;
        }
        let line_slice = self.rope.line(line);
        let mut len = line_slice.len_chars();
        if len == 0 {
            return 0;
        }
        let last_char = line_slice.char(len - 1);
        if last_char == '\n' {
            len = len.saturating_sub(1);
            if len > 0 && line_slice.char(len - 1) == '\r' {
                len = len.saturating_sub(1);
            }
        } else if last_char == '\r' {
            len = len.saturating_sub(1);
        }
        len
    }

    /// Strict conversion of a 1-based position into a global char index.
    fn char_index(&self, position: Position) -> Result<usize, String> {
        if position.line == 0 || position.line > self.line_count() {
            return Err(format!(
                "line {} outside 1..={}",
                position.line,
                self.line_count()
            ));
        }
        let line = position.line - 1;
        let max_column = self.line_len_chars(line) + 1;
        if position.column == 0 || position.column > max_column {
            return Err(format!(
                "column {} outside 1..={} on line {}",
                position.column, max_column, position.line
            ));
        }
        Ok(self.rope.line_to_char(line) + position.column - 1)
    }

    /// Convert a global char index into a 1-based position.
    fn position_at(&self, char_index: usize) -> Position {
        let clamped = char_index.min(self.char_len);
        let line = line_for_char(&self.rope, clamped);
        let line_start = self.rope.line_to_char(line);
        let col = clamped
            .saturating_sub(line_start)
            .min(self.line_len_chars(line));
        Position::new(line + 1, col + 1)
    }
}

impl EditableDocument for RopeDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_content(&self, line: usize) -> String {
        if line == 0 || line > self.line_count() {
            return String::new();
        }
        let index = line - 1;
        let keep_chars = self.line_len_chars(index);
        self.rope.line(index).slice(..keep_chars).to_string()
    }

    fn validate_position(&self, raw: Position) -> Position {
        let line = raw.line.clamp(1, self.line_count());
        let max_column = self.line_len_chars(line - 1) + 1;
        Position::new(line, raw.column.clamp(1, max_column))
    }

    fn validate_range(&self, start: Position, end: Position) -> Result<Range, EditError> {
        if end < start {
            return Err(EditError::invalid_range(
                Range::from_positions(start, end),
                "end precedes start",
            ));
        }
        Ok(Range::from_positions(
            self.validate_position(start),
            self.validate_position(end),
        ))
    }

    fn apply_edits(
        &mut self,
        ops: &[MergedOperation],
    ) -> Result<Vec<InverseEditOperation>, EditError> {
        if ops.is_empty() {
            return Ok(Vec::new());
        }

        let mut resolved = Vec::with_capacity(ops.len());
        for op in ops {
            let range = op.range();
            let start = self
                .char_index(range.start())
                .map_err(|reason| EditError::invalid_range(range, reason))?;
            let end = self
                .char_index(range.end())
                .map_err(|reason| EditError::invalid_range(range, reason))?;
            resolved.push(ResolvedEdit {
                start,
                end,
                text: op.text(),
            });
        }

        let mut order: Vec<usize> = (0..resolved.len()).collect();
        order.sort_by_key(|&index| (resolved[index].start, index));
        for pair in order.windows(2) {
            let (prev, next) = (&resolved[pair[0]], &resolved[pair[1]]);
            if next.start < prev.end {
                return Err(EditError::invalid_range(
                    ops[pair[1]].range(),
                    format!("overlaps {}", ops[pair[0]].range()),
                ));
            }
        }

        // New-document char spans, computed against original offsets.
        let mut spans = vec![(0usize, 0usize); resolved.len()];
        let mut replaced = vec![String::new(); resolved.len()];
        let mut delta: isize = 0;
        for &index in &order {
            let edit = &resolved[index];
            let inserted = edit.text.chars().count();
            let new_start = (edit.start as isize + delta).max(0) as usize;
            spans[index] = (new_start, new_start + inserted);
            replaced[index] = self.rope.slice(edit.start..edit.end).to_string();
            delta += inserted as isize - (edit.end - edit.start) as isize;
        }

        for &index in order.iter().rev() {
            let edit = &resolved[index];
            if edit.start < edit.end {
                self.rope.remove(edit.start..edit.end);
            }
            if !edit.text.is_empty() {
                self.rope.insert(edit.start, edit.text);
            }
        }
        self.char_len = self.rope.len_chars();
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(
            operations = ops.len(),
            revision = self.revision,
            "Applied edit batch"
        );

        Ok(spans
            .into_iter()
            .zip(replaced)
            .map(|((start, end), text)| InverseEditOperation {
                range: Range::from_positions(self.position_at(start), self.position_at(end)),
                text,
            })
            .collect())
    }
}
