//! Commit effect - sends the pending order to the reorder sink.
//!
//! Direct-call pattern:
//!   "Update Order" → begin_commit (machine) → sink.reorder (IO) → complete_commit (machine)
//!
//! There is no retry. A failed commit leaves the changes pending and the
//! error on the controller for the host to show.

use tracing::info;

use crate::common::Result;
use crate::domains::reserves::machines::ReorderController;
use crate::kernel::BaseReorderSink;

/// Persist the controller's pending order through `sink`.
pub async fn update_order(
    controller: &mut ReorderController,
    sink: &dyn BaseReorderSink,
) -> Result<()> {
    let payload = controller.begin_commit()?;

    info!(
        course_id = %controller.course_id(),
        electronic = payload.electronic.len(),
        print = payload.print.len(),
        "Updating resource order"
    );

    let outcome = sink.reorder(controller.course_id(), &payload).await;
    controller.complete_commit(outcome)
}
