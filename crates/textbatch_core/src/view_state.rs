//! Persisted editor view state and its boundary decoding.

use crate::cursor::Selection;
use crate::error::EditError;
use crate::range::Position;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One persisted cursor: selection anchor plus caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorState {
    pub selection_start: Position,
    pub position: Position,
}

impl From<Selection> for CursorState {
    fn from(selection: Selection) -> Self {
        Self {
            selection_start: selection.anchor,
            position: selection.active,
        }
    }
}

impl From<CursorState> for Selection {
    fn from(state: CursorState) -> Self {
        Selection::new(state.selection_start, state.position)
    }
}

/// Cursor state as found on disk.
///
/// Older snapshots stored a single cursor; current ones store a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedCursorState {
    Current(Vec<CursorState>),
    Legacy(CursorState),
}

impl SavedCursorState {
    /// Normalize either shape into a cursor list.
    pub fn into_states(self) -> Vec<CursorState> {
        match self {
            Self::Current(states) => states,
            Self::Legacy(state) => vec![state],
        }
    }
}

/// Scroll offsets of the attached view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub scroll_top: u64,
    pub scroll_left: u64,
}

/// Everything needed to restore an editor's view after a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorViewState {
    pub cursor_state: SavedCursorState,
    #[serde(default)]
    pub view_state: ViewportState,
    /// Opaque per-contribution state keyed by contribution id.
    #[serde(default)]
    pub contributions_state: BTreeMap<String, Value>,
}

impl EditorViewState {
    /// Decode a persisted snapshot.
    pub fn from_json(raw: &str) -> Result<Self, EditError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, EditError> {
        Ok(serde_json::to_string(self)?)
    }
}
