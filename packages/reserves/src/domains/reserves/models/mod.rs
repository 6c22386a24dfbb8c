pub mod resource;
pub mod sort_type;

pub use resource::{
    CopiedItem, ElectronicResource, PrintResource, RecordMetadata, Resource, ResourceType,
    PRINT_MATERIAL_TYPE, UNORDERED_SENTINEL,
};
pub use sort_type::SortType;
