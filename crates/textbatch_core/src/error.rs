//! Error types for edit batches and persisted editor state.
use crate::range::Range;
use thiserror::Error;

/// Top-level error type for the edit core.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Invalid range {range}: {reason}")]
    InvalidRange { range: Range, reason: String },

    #[error("No inverse edit operations to place the cursor from")]
    EmptyResult,

    #[error("View state error: {0}")]
    ViewState(#[from] serde_json::Error),
}

impl EditError {
    pub(crate) fn invalid_range(range: Range, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            range,
            reason: reason.into(),
        }
    }
}
