pub mod drag;
pub mod reorder;

pub use drag::DragSession;
pub use reorder::ReorderController;
