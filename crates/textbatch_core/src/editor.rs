//! Editor facade tying the document, cursor, widgets and contributions
//! together.

use crate::command::{execute_command, CommandRunner, EditCommand};
use crate::config::{normalize_tab_size, EditorOptions};
use crate::contributions::{ContributionDescriptor, ContributionRegistry, ContributionReport};
use crate::cursor::{CursorPlacement, Selection};
use crate::document::{EditableDocument, RopeDocument};
use crate::error::EditError;
use crate::indentation::{convert_indentation, IndentationMode};
use crate::range::Position;
use crate::view_state::{CursorState, EditorViewState, SavedCursorState, ViewportState};
use crate::widgets::{RenderSurface, WidgetLifecycleManager};

/// Result of an indentation conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// Number of lines whose indentation was rewritten.
    pub edits: usize,
    /// Cursor after the edit; `None` when nothing changed.
    pub selection: Option<Selection>,
}

/// Single-document editor over a [`RopeDocument`].
pub struct Editor<S: RenderSurface> {
    document: RopeDocument,
    selections: Vec<Selection>,
    options: EditorOptions,
    viewport: ViewportState,
    widgets: WidgetLifecycleManager<S>,
    contributions: ContributionRegistry,
}

impl<S: RenderSurface> Editor<S> {
    pub fn new(text: &str) -> Self {
        Self::with_options(text, EditorOptions::default())
    }

    /// Create an editor with explicit options, usually seeded from
    /// [`crate::Config`].
    pub fn with_options(text: &str, options: EditorOptions) -> Self {
        Self {
            document: RopeDocument::new(text),
            selections: vec![Selection::collapsed(Position::new(1, 1))],
            options: EditorOptions {
                tab_size: normalize_tab_size(options.tab_size),
                ..options
            },
            viewport: ViewportState::default(),
            widgets: WidgetLifecycleManager::new(),
            contributions: ContributionRegistry::default(),
        }
    }

    /// Create an editor and instantiate its contributions.
    pub fn with_contributions(
        text: &str,
        descriptors: impl IntoIterator<Item = ContributionDescriptor>,
    ) -> (Self, ContributionReport) {
        let mut editor = Self::new(text);
        let report = editor.contributions.instantiate_all(descriptors);
        (editor, report)
    }

    pub fn document(&self) -> &RopeDocument {
        &self.document
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    /// Replace the selections, clamping every position into the document.
    ///
    /// An empty list resets to a single cursor at the document start.
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        let validated: Vec<Selection> = selections
            .into_iter()
            .map(|selection| {
                Selection::new(
                    self.document.validate_position(selection.anchor),
                    self.document.validate_position(selection.active),
                )
            })
            .collect();
        self.selections = if validated.is_empty() {
            vec![Selection::collapsed(Position::new(1, 1))]
        } else {
            validated
        };
    }

    pub fn options(&self) -> EditorOptions {
        self.options
    }

    /// Switch the indentation style and size without touching the text.
    pub fn indent_using(&mut self, mode: IndentationMode, tab_size: usize) {
        self.options.tab_size = normalize_tab_size(tab_size);
        self.options.insert_spaces = mode == IndentationMode::Spaces;
        tracing::debug!(
            "Indentation set to {} (tab size {})",
            mode,
            self.options.tab_size
        );
    }

    /// Flip whitespace rendering; returns the new setting.
    pub fn toggle_render_whitespace(&mut self) -> bool {
        self.options.render_whitespace = !self.options.render_whitespace;
        self.options.render_whitespace
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportState) {
        if self.has_view() {
            self.viewport = viewport;
        }
    }

    pub fn widgets(&self) -> &WidgetLifecycleManager<S> {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut WidgetLifecycleManager<S> {
        &mut self.widgets
    }

    pub fn contributions(&self) -> &ContributionRegistry {
        &self.contributions
    }

    /// True while a render surface is attached.
    pub fn has_view(&self) -> bool {
        self.widgets.is_attached()
    }

    /// Run `command` against the document and adopt its resulting cursor.
    pub fn execute_command(
        &mut self,
        command: &mut dyn EditCommand,
    ) -> Result<Option<Selection>, EditError> {
        let selection = execute_command(&mut self.document, command)?;
        if let Some(selection) = selection {
            self.selections = vec![selection];
        }
        Ok(selection)
    }

    /// Rewrite all leading indentation to `mode` at `tab_size`.
    ///
    /// On success `insert_spaces` follows `mode`; the tab size option is
    /// left alone.
    pub fn convert_indentation(
        &mut self,
        mode: IndentationMode,
        tab_size: usize,
    ) -> Result<ConversionOutcome, EditError> {
        let ops = convert_indentation(&self.document, mode, tab_size);
        let edits = ops.len();
        let mut runner = CommandRunner::new(ops, CursorPlacement::EndOfLastEditOperation);
        let selection = self.execute_command(&mut runner)?;
        self.options.insert_spaces = mode == IndentationMode::Spaces;
        Ok(ConversionOutcome { edits, selection })
    }

    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.widgets.attach(surface)
    }

    pub fn detach_surface(&mut self) -> Option<S> {
        self.widgets.detach()
    }

    /// Snapshot cursor, scroll and contribution state; `None` while detached.
    pub fn save_view_state(&self) -> Option<EditorViewState> {
        if !self.has_view() {
            return None;
        }
        Some(EditorViewState {
            cursor_state: SavedCursorState::Current(
                self.selections.iter().copied().map(CursorState::from).collect(),
            ),
            view_state: self.viewport,
            contributions_state: self.contributions.save_view_state(),
        })
    }

    /// Restore a snapshot from [`Self::save_view_state`]. Ignored while
    /// detached; returns whether the state was applied.
    pub fn restore_view_state(&mut self, state: EditorViewState) -> bool {
        if !self.has_view() {
            return false;
        }
        let selections = state
            .cursor_state
            .into_states()
            .into_iter()
            .map(Selection::from)
            .collect();
        self.set_selections(selections);
        self.viewport = state.view_state;
        self.contributions
            .restore_view_state(&state.contributions_state);
        true
    }

    /// Detach, drop every widget registration and contribution.
    pub fn dispose(&mut self) -> Option<S> {
        self.contributions.clear();
        self.widgets.dispose()
    }
}
