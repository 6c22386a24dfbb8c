// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no ordering logic.
// The reorder controller decides what to send; implementations only deliver it.
//
// Naming convention: Base* for trait names (e.g., BaseReorderSink)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::reserves::data::ReorderPayload;

// =============================================================================
// Reorder Sink Trait (Infrastructure - persists a committed order)
// =============================================================================

#[async_trait]
pub trait BaseReorderSink: Send + Sync {
    /// Persist the order of a course's resources.
    /// Must return Ok only once the backend accepted the whole payload.
    async fn reorder(&self, course_id: &str, payload: &ReorderPayload) -> Result<()>;
}
