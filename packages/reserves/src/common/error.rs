//! Error taxonomy for the ordering core.
//!
//! Local computation (sorting, moves) never fails on malformed data. The
//! variants here cover operations that are not allowed in the current state
//! and commits that the backend refused.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReorderError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReorderError {
    #[error("manual reordering is only available under the manual sort mode")]
    ManualSortRequired,

    #[error("there are no pending changes to commit")]
    NothingToCommit,

    #[error("an order update is already in progress")]
    CommitInProgress,

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("index {index} is out of range for {len} resources")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no drag is in progress")]
    NoActiveDrag,

    #[error("finish or cancel the current drag first")]
    DragInProgress,

    #[error("invalid sort type: {0}")]
    InvalidSortType(String),

    #[error("invalid resource key: {0}")]
    InvalidResourceKey(String),

    #[error("failed to update order: {0}")]
    CommitFailed(String),
}
