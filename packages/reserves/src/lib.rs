// Course Reserves - Resource Ordering Core
//
// This crate holds the ordering logic behind the course reserves admin table:
// the sort engine, the reorder controller that tracks unsaved local edits, and
// the sink that commits a finished order to the backend.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
