//! Root crate facade for textbatch: the edit core plus file-level
//! indentation conversion used by the CLI.

use anyhow::Context;
use std::path::{Path, PathBuf};
use textbatch_core::widgets::WidgetData;

pub use textbatch_core::{
    command, config, contributions, cursor, document, edit, editor, error, indentation, range,
    view_state, widgets, CommandRunner, Config, CursorPlacement, EditError, EditOperation, Editor,
    EditorOptions, IndentationMode, Position, Range, RopeDocument, Selection,
};

/// Surface for editors that never render.
#[derive(Debug, Default)]
pub struct HeadlessSurface;

impl widgets::RenderSurface for HeadlessSurface {
    fn replay(&mut self, _widgets: &[WidgetData]) {}

    fn add_widget(&mut self, _widget: &WidgetData) {}

    fn layout_widget(&mut self, _widget: &WidgetData) {}

    fn remove_widget(&mut self, _id: &str) {}

    fn teardown(&mut self) {}
}

/// Outcome of [`convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub path: PathBuf,
    pub mode: IndentationMode,
    pub tab_size: usize,
    /// Lines whose indentation changed.
    pub edits: usize,
    /// Cursor after the conversion; `None` when nothing changed.
    pub cursor: Option<Position>,
    /// Converted file content.
    pub output: String,
}

/// Convert the leading indentation of the file at `path`.
///
/// When `in_place` is set and at least one line changed, the converted text
/// is written back to `path`.
///
/// # Returns
/// A [`ConversionReport`] describing the edit batch and the converted text.
///
/// # Errors
/// Returns an error when the file cannot be read or written, or when the
/// edit batch is rejected by the document.
pub fn convert_file(
    path: &Path,
    mode: IndentationMode,
    tab_size: usize,
    in_place: bool,
) -> anyhow::Result<ConversionReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut editor: Editor<HeadlessSurface> = Editor::new(&text);
    let outcome = editor.convert_indentation(mode, tab_size)?;
    let output = editor.document().text();
    tracing::info!(
        "Converted {} line(s) of {} to {}",
        outcome.edits,
        path.display(),
        mode
    );

    if in_place && outcome.edits > 0 {
        std::fs::write(path, output.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(ConversionReport {
        path: path.to_path_buf(),
        mode,
        tab_size: config::normalize_tab_size(tab_size),
        edits: outcome.edits,
        cursor: outcome.selection.map(|selection| selection.active),
        output,
    })
}
