//! Error type shared by every stage of the pipeline.
//!
//! Rendering is deterministic and single-pass, so nothing here is
//! retryable: each variant is either a configuration defect or a misuse
//! of the engine.

use crate::engine::{BlockId, LockId};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("width {width} leaves no room for text after padding (left {left}, right {right})")]
    WrapWidth {
        width: usize,
        left: usize,
        right: usize,
    },

    #[error("body indent {indent} does not fit into wrap width {wrap_width}")]
    IndentTooWide { indent: usize, wrap_width: usize },

    #[error("unknown color name: {0:?}")]
    UnknownColor(String),

    #[error("unknown color attribute: {0:?}")]
    UnknownAttribute(String),

    #[error("cursor of {0:?} pulled after its last line")]
    CursorExhausted(BlockId),

    #[error("{lock:?} cannot be registered under {master:?}: locks would form a cycle")]
    LockCycle { lock: LockId, master: LockId },

    #[error("print pass made no progress after {rows} rows (a master lock never opens)")]
    Stalled { rows: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
