//! Reorder events - FACT EVENTS ONLY
//!
//! The controller records what happened; the host drains these to drive
//! notifications (e.g. a toast when a commit fails).

use crate::domains::reserves::models::SortType;

/// Why the displayed order changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    ToTop,
    ToBottom,
    After,
    ToPosition,
    Up,
    Down,
    Drag,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderEvent {
    /// Local order changed and is now pending
    OrderChanged { kind: MoveKind, moved: usize },

    /// Sort mode changed
    SortChanged { sort: SortType },

    /// Source arrays arrived while local edits were pending and were held back
    SourcesDeferred,

    /// List rebuilt from source arrays
    SourcesApplied { count: usize },

    /// Local edits were dropped
    ChangesDiscarded,

    /// Commit succeeded
    OrderCommitted { count: usize },

    /// Commit failed; pending changes kept for retry
    CommitFailed { message: String },
}
