//! Reorder payload sent to the backend on commit.
//!
//! The combined table is split back into one array per resource type. Records
//! carry bare backend ids; table key prefixes never appear here.

use serde::{Deserialize, Serialize};

use crate::domains::reserves::models::{CopiedItem, Resource};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElectronicOrderRecord {
    pub resource_id: i64,
    pub course_resource_id: i64,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrderRecord {
    pub id: String,
    pub order: u32,
    pub copied_item: Option<CopiedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReorderPayload {
    pub electronic: Vec<ElectronicOrderRecord>,
    pub print: Vec<PrintOrderRecord>,
}

impl ReorderPayload {
    /// Build the payload from a displayed list.
    ///
    /// Orders are taken from list position, so a list that was not freshly
    /// stamped still produces a dense ranking.
    pub fn from_resources(resources: &[Resource]) -> Self {
        let mut payload = Self::default();
        for (index, resource) in resources.iter().enumerate() {
            let order = index as u32 + 1;
            match resource {
                Resource::Electronic(e) => payload.electronic.push(ElectronicOrderRecord {
                    resource_id: e.resource_id,
                    course_resource_id: e.course_resource_id,
                    order,
                }),
                Resource::Print(p) => payload.print.push(PrintOrderRecord {
                    id: p.id.clone(),
                    order,
                    copied_item: p.copied_item.clone(),
                }),
            }
        }
        payload
    }

    pub fn len(&self) -> usize {
        self.electronic.len() + self.print.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
