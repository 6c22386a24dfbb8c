//! Kernel module - infrastructure the ordering core talks to.

pub mod http_sink;
pub mod test_dependencies;
pub mod traits;

pub use http_sink::{HttpReorderSink, SinkError};
pub use test_dependencies::MockReorderSink;
pub use traits::*;
