//! Edit batches that convert leading indentation between tabs and spaces.

use crate::config::normalize_tab_size;
use crate::document::EditableDocument;
use crate::edit::EditOperation;
use crate::range::Range;
use std::fmt;
use std::str::FromStr;

/// Target indentation style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndentationMode {
    Spaces,
    Tabs,
}

impl fmt::Display for IndentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces => f.write_str("spaces"),
            Self::Tabs => f.write_str("tabs"),
        }
    }
}

impl FromStr for IndentationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spaces" | "space" => Ok(Self::Spaces),
            "tabs" | "tab" => Ok(Self::Tabs),
            other => Err(format!("unknown indentation mode: {}", other)),
        }
    }
}

/// Leading whitespace of `line`: its char length and visible width.
fn leading_indent(line: &str, tab_size: usize) -> (usize, usize) {
    let mut chars = 0;
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += tab_size - width % tab_size,
            _ => break,
        }
        chars += 1;
    }
    (chars, width)
}

fn convert_lines<D, F>(doc: &D, tab_size: usize, render: F) -> Vec<EditOperation>
where
    D: EditableDocument + ?Sized,
    F: Fn(usize, usize) -> String,
{
    let tab_size = normalize_tab_size(tab_size);
    let mut ops = Vec::new();
    for line in 1..=doc.line_count() {
        let content = doc.line_content(line);
        let (indent_chars, width) = leading_indent(content.as_str(), tab_size);
        if indent_chars == 0 {
            continue;
        }
        let replacement = render(width, tab_size);
        let current: String = content.chars().take(indent_chars).collect();
        if replacement != current {
            ops.push(EditOperation::new(
                Range::new(line, 1, line, indent_chars + 1),
                replacement,
            ));
        }
    }
    tracing::debug!(
        edits = ops.len(),
        tab_size,
        "Built indentation conversion batch"
    );
    ops
}

/// Replace every line's leading whitespace with spaces.
pub fn indentation_to_spaces<D>(doc: &D, tab_size: usize) -> Vec<EditOperation>
where
    D: EditableDocument + ?Sized,
{
    convert_lines(doc, tab_size, |width, _| " ".repeat(width))
}

/// Replace every line's leading whitespace with tabs, padding the remainder
/// with spaces.
pub fn indentation_to_tabs<D>(doc: &D, tab_size: usize) -> Vec<EditOperation>
where
    D: EditableDocument + ?Sized,
{
    convert_lines(doc, tab_size, |width, tab_size| {
        let mut indent = "\t".repeat(width / tab_size);
        indent.push_str(" ".repeat(width % tab_size).as_str());
        indent
    })
}

/// Dispatch on `mode`.
pub fn convert_indentation<D>(
    doc: &D,
    mode: IndentationMode,
    tab_size: usize,
) -> Vec<EditOperation>
where
    D: EditableDocument + ?Sized,
{
    match mode {
        IndentationMode::Spaces => indentation_to_spaces(doc, tab_size),
        IndentationMode::Tabs => indentation_to_tabs(doc, tab_size),
    }
}
