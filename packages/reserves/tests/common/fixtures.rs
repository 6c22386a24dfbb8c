//! Test fixtures for building resource lists.

#![allow(dead_code)]

use reserves_core::common::ResourceKey;
use reserves_core::domains::reserves::{
    CopiedItem, ElectronicResource, PrintResource, RecordMetadata, Resource,
};

/// Electronic resource with a title and an optional order
pub fn electronic(resource_id: i64, name: &str, order: Option<u32>) -> ElectronicResource {
    ElectronicResource {
        resource_id,
        course_resource_id: resource_id * 10,
        name: Some(name.to_string()),
        item_url: Some(format!("https://library.test/e/{}", resource_id)),
        material_type_name: Some("Article".to_string()),
        created_at: None,
        order,
    }
}

/// Print resource with a title and an optional order
pub fn print(id: &str, title: &str, order: Option<u32>) -> PrintResource {
    PrintResource {
        id: id.to_string(),
        copied_item: Some(CopiedItem {
            title: Some(title.to_string()),
            call_number: Some(format!("QA76.{}", id)),
            instance_id: Some(format!("inst-{}", id)),
            holdings_id: Some(format!("hold-{}", id)),
        }),
        metadata: None,
        order,
    }
}

pub fn dated_electronic(resource_id: i64, name: &str, created_at: &str) -> Resource {
    let mut e = electronic(resource_id, name, None);
    e.created_at = Some(created_at.to_string());
    Resource::Electronic(e)
}

pub fn dated_print(id: &str, title: &str, created_date: &str) -> Resource {
    let mut p = print(id, title, None);
    p.metadata = Some(RecordMetadata {
        created_date: Some(created_date.to_string()),
    });
    Resource::Print(p)
}

pub fn e(resource_id: i64, name: &str) -> Resource {
    Resource::Electronic(electronic(resource_id, name, None))
}

pub fn p(id: &str, title: &str) -> Resource {
    Resource::Print(print(id, title, None))
}

pub fn ekey(resource_id: i64) -> ResourceKey {
    ResourceKey::Electronic(resource_id)
}

pub fn pkey(id: &str) -> ResourceKey {
    ResourceKey::Print(id.to_string())
}

/// Table keys in display order, e.g. ["e-1", "p-a"]
pub fn keys(resources: &[Resource]) -> Vec<String> {
    resources.iter().map(|r| r.key().to_string()).collect()
}

pub fn orders(resources: &[Resource]) -> Vec<Option<u32>> {
    resources.iter().map(Resource::order).collect()
}
