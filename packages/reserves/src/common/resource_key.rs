//! List keys for the combined resource table.
//!
//! Electronic and print resources come from different systems and their ids can
//! collide, so the table keys each row with a type prefix: `e-{resource_id}` for
//! electronic rows and `p-{id}` for print rows. The prefix exists only for the
//! table. Persistence uses the bare ids, which is why the key is a typed enum
//! rather than a formatted string: payload builders read the inner id and never
//! see the prefix.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

use super::ReorderError;

const ELECTRONIC_PREFIX: &str = "e-";
const PRINT_PREFIX: &str = "p-";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKey {
    /// Keyed by the electronic `resource_id`.
    Electronic(i64),
    /// Keyed by the print record's own id.
    Print(String),
}

impl ResourceKey {
    /// The id with the table prefix stripped.
    pub fn bare_id(&self) -> String {
        match self {
            ResourceKey::Electronic(id) => id.to_string(),
            ResourceKey::Print(id) => id.clone(),
        }
    }

    pub fn is_electronic(&self) -> bool {
        matches!(self, ResourceKey::Electronic(_))
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Electronic(id) => write!(f, "{}{}", ELECTRONIC_PREFIX, id),
            ResourceKey::Print(id) => write!(f, "{}{}", PRINT_PREFIX, id),
        }
    }
}

impl FromStr for ResourceKey {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix(ELECTRONIC_PREFIX) {
            return rest
                .parse()
                .map(ResourceKey::Electronic)
                .map_err(|_| ReorderError::InvalidResourceKey(s.to_string()));
        }
        match s.strip_prefix(PRINT_PREFIX) {
            Some(rest) if !rest.is_empty() => Ok(ResourceKey::Print(rest.to_string())),
            _ => Err(ReorderError::InvalidResourceKey(s.to_string())),
        }
    }
}

impl Serialize for ResourceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
