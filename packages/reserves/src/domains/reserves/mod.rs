//! Reserves domain - ordering of a course's print and electronic resources
//!
//! Key pieces:
//! - Sort engine: named strategies over the combined list, plus the default
//!   order for courses that were never arranged by hand
//! - Bulk moves and drag sessions for manual arrangement
//! - Reorder controller: displayed list, selection, unsaved-change tracking
//! - Commit effect: hands the finished order to a reorder sink

pub mod actions;
pub mod data;
pub mod effects;
pub mod events;
pub mod machines;
pub mod models;

// Re-export models
pub use models::{
    CopiedItem, ElectronicResource, PrintResource, RecordMetadata, Resource, ResourceType,
    SortType, UNORDERED_SENTINEL,
};

// Re-export the sort engine
pub use actions::{apply_sort_order, default_order, is_manual_sort, sort_resources};

// Re-export data types (wire payloads)
pub use data::{ElectronicOrderRecord, PrintOrderRecord, ReorderPayload};

// Re-export machines and effects
pub use effects::update_order;
pub use events::{MoveKind, ReorderEvent};
pub use machines::{DragSession, ReorderController};
