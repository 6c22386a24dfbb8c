pub mod payload;

pub use payload::{ElectronicOrderRecord, PrintOrderRecord, ReorderPayload};
