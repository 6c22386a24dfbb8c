//! Resource model - print and electronic course reserve items
//!
//! The reserves table shows two kinds of records side by side. Electronic
//! resources come from the customization API and persist by
//! `resource_id`/`course_resource_id`. Print resources are FOLIO reserves and
//! persist by their own `id`. Both carry an `order` that is either an explicit
//! 1-based position or the "not yet ordered" sentinel.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::common::ResourceKey;

/// Order value the backend uses for resources that were never placed manually.
pub const UNORDERED_SENTINEL: u32 = 999;

/// Material type reported for every print resource.
pub const PRINT_MATERIAL_TYPE: &str = "Book";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Electronic,
    Print,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Electronic => write!(f, "electronic"),
            ResourceType::Print => write!(f, "print"),
        }
    }
}

/// Electronic resource linked to a course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ElectronicResource {
    #[serde(default)]
    pub resource_id: i64,
    #[serde(default)]
    pub course_resource_id: i64,

    pub name: Option<String>,
    pub item_url: Option<String>,
    pub material_type_name: Option<String>,
    pub created_at: Option<String>,

    #[serde(default)]
    pub order: Option<u32>,
}

/// Snapshot of the inventory item a print reserve was copied from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CopiedItem {
    pub title: Option<String>,
    pub call_number: Option<String>,
    pub instance_id: Option<String>,
    pub holdings_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub created_date: Option<String>,
}

/// Print reserve from FOLIO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrintResource {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub copied_item: Option<CopiedItem>,
    #[serde(default)]
    pub metadata: Option<RecordMetadata>,

    #[serde(default)]
    pub order: Option<u32>,
}

/// A row of the combined reserves table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "resourceType", rename_all = "snake_case")]
pub enum Resource {
    Electronic(ElectronicResource),
    Print(PrintResource),
}

impl Resource {
    /// Table key (`e-{resource_id}` / `p-{id}`)
    pub fn key(&self) -> ResourceKey {
        match self {
            Resource::Electronic(e) => ResourceKey::Electronic(e.resource_id),
            Resource::Print(p) => ResourceKey::Print(p.id.clone()),
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Electronic(_) => ResourceType::Electronic,
            Resource::Print(_) => ResourceType::Print,
        }
    }

    /// Display title; empty when the record has none.
    pub fn title(&self) -> &str {
        let title = match self {
            Resource::Electronic(e) => e.name.as_deref(),
            Resource::Print(p) => p.copied_item.as_ref().and_then(|c| c.title.as_deref()),
        };
        title.unwrap_or("")
    }

    /// Material type used for grouping.
    pub fn material_type(&self) -> &str {
        match self {
            Resource::Electronic(e) => e.material_type_name.as_deref().unwrap_or(""),
            Resource::Print(_) => PRINT_MATERIAL_TYPE,
        }
    }

    /// Creation time in milliseconds since the epoch; 0 when missing or unreadable.
    pub fn created_at_millis(&self) -> i64 {
        let raw = match self {
            Resource::Electronic(e) => e.created_at.as_deref(),
            Resource::Print(p) => p.metadata.as_ref().and_then(|m| m.created_date.as_deref()),
        };
        raw.and_then(parse_timestamp_millis).unwrap_or(0)
    }

    pub fn order(&self) -> Option<u32> {
        match self {
            Resource::Electronic(e) => e.order,
            Resource::Print(p) => p.order,
        }
    }

    pub fn set_order(&mut self, order: u32) {
        match self {
            Resource::Electronic(e) => e.order = Some(order),
            Resource::Print(p) => p.order = Some(order),
        }
    }

    /// True when the record carries an explicit manual position.
    pub fn has_manual_order(&self) -> bool {
        matches!(self.order(), Some(o) if o != UNORDERED_SENTINEL)
    }

    /// Rank for manual ordering. Unordered records rank after every real position.
    pub fn manual_rank(&self) -> u32 {
        match self.order() {
            Some(o) if o != UNORDERED_SENTINEL => o,
            _ => u32::MAX,
        }
    }
}

impl From<ElectronicResource> for Resource {
    fn from(resource: ElectronicResource) -> Self {
        Resource::Electronic(resource)
    }
}

impl From<PrintResource> for Resource {
    fn from(resource: PrintResource) -> Self {
        Resource::Print(resource)
    }
}

/// Parse the timestamp shapes the two backends emit.
///
/// FOLIO writes `+0000` offsets, the customization API writes RFC 3339, and
/// older rows carry naive timestamps or bare dates.
fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_is_empty() {
        let print = Resource::Print(PrintResource {
            id: "1".into(),
            ..Default::default()
        });
        assert_eq!(print.title(), "");
    }

    #[test]
    fn sentinel_and_missing_orders_rank_last() {
        let mut e = Resource::Electronic(ElectronicResource {
            order: Some(UNORDERED_SENTINEL),
            ..Default::default()
        });
        assert_eq!(e.manual_rank(), u32::MAX);
        assert!(!e.has_manual_order());

        e.set_order(3);
        assert_eq!(e.manual_rank(), 3);
        assert!(e.has_manual_order());
    }

    #[test]
    fn parses_backend_timestamps() {
        assert_eq!(parse_timestamp_millis("1970-01-01T00:00:01Z"), Some(1000));
        assert_eq!(
            parse_timestamp_millis("1970-01-01T00:00:01.000+0000"),
            Some(1000)
        );
        assert_eq!(parse_timestamp_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(parse_timestamp_millis("not a date"), None);
    }

    #[test]
    fn deserializes_tagged_rows() {
        let json = r#"[
            {"resourceType": "electronic", "resource_id": 1, "course_resource_id": 10,
             "name": "Zebra", "order": 999},
            {"resourceType": "print", "id": "abc",
             "copiedItem": {"title": "Apple", "callNumber": "QA76"},
             "metadata": {"createdDate": "2024-01-01T00:00:00.000+0000"}, "order": null}
        ]"#;
        let rows: Vec<Resource> = serde_json::from_str(json).unwrap();

        assert_eq!(rows[0].key().to_string(), "e-1");
        assert_eq!(rows[0].title(), "Zebra");
        assert_eq!(rows[1].key().to_string(), "p-abc");
        assert_eq!(rows[1].title(), "Apple");
        assert_eq!(rows[1].order(), None);
        assert!(rows[1].created_at_millis() > 0);
    }

    #[test]
    fn rows_without_ids_still_deserialize() {
        let json = r#"[
            {"resourceType": "electronic", "name": "Draft link"},
            {"resourceType": "print", "copiedItem": {"title": "Loose copy"}}
        ]"#;
        let rows: Vec<Resource> = serde_json::from_str(json).unwrap();

        assert_eq!(rows[0].key(), ResourceKey::Electronic(0));
        assert_eq!(rows[0].title(), "Draft link");
        assert_eq!(rows[1].key(), ResourceKey::Print(String::new()));
        assert_eq!(rows[1].title(), "Loose copy");
    }
}
