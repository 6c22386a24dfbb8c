// Common types shared across the crate

pub mod error;
pub mod resource_key;

pub use error::{ReorderError, Result};
pub use resource_key::ResourceKey;
