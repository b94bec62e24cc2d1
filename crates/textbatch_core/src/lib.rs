//! Core library for textbatch: atomic edit batches, cursor placement and
//! widget lifecycle.

/// Edit commands and the host-side executor.
pub mod command;
/// Indentation settings loaded from the environment.
pub mod config;
/// Editor contributions and their view-state capability.
pub mod contributions;
/// Cursor placement after applied edits.
pub mod cursor;
/// Host document contract and the rope-backed document.
pub mod document;
/// Edit operations and batch merging.
pub mod edit;
/// Editor facade.
pub mod editor;
/// Error types for edits and persisted state.
pub mod error;
/// Tab/space indentation conversion batches.
pub mod indentation;
/// Positions, ranges and their ordering.
pub mod range;
/// Persisted view state.
pub mod view_state;
/// Widget registry and surface lifecycle.
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use command::{execute_command, CommandRunner, EditCommand};
pub use config::{Config, EditorOptions};
pub use cursor::{CursorPlacement, Selection};
pub use document::{EditableDocument, InverseEditOperation, RopeDocument};
pub use edit::{merge, EditOperation, MergedOperation};
pub use editor::{ConversionOutcome, Editor};
pub use error::EditError;
pub use indentation::IndentationMode;
pub use range::{Position, Range};
pub use widgets::{RenderSurface, WidgetData, WidgetLifecycleManager, WidgetPosition};
