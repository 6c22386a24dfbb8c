use serde::{Deserialize, Serialize};

use crate::common::ReorderError;

/// Sort modes offered by the reserves table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortType {
    #[default]
    Manual,
    AlphabeticalAsc,
    AlphabeticalDesc,
    ElectronicFirstAlphaAsc,
    ElectronicFirstAlphaDesc,
    PrintFirstAlphaAsc,
    PrintFirstAlphaDesc,
    DateNewest,
    DateOldest,
    MaterialType,
}

impl SortType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Manual => "manual",
            SortType::AlphabeticalAsc => "alphabetical-asc",
            SortType::AlphabeticalDesc => "alphabetical-desc",
            SortType::ElectronicFirstAlphaAsc => "electronic-first-alpha-asc",
            SortType::ElectronicFirstAlphaDesc => "electronic-first-alpha-desc",
            SortType::PrintFirstAlphaAsc => "print-first-alpha-asc",
            SortType::PrintFirstAlphaDesc => "print-first-alpha-desc",
            SortType::DateNewest => "date-newest",
            SortType::DateOldest => "date-oldest",
            SortType::MaterialType => "material-type",
        }
    }

    /// Dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            SortType::Manual => "Manual Order",
            SortType::AlphabeticalAsc => "Title (A-Z)",
            SortType::AlphabeticalDesc => "Title (Z-A)",
            SortType::ElectronicFirstAlphaAsc => "Electronic First (A-Z)",
            SortType::ElectronicFirstAlphaDesc => "Electronic First (Z-A)",
            SortType::PrintFirstAlphaAsc => "Print First (A-Z)",
            SortType::PrintFirstAlphaDesc => "Print First (Z-A)",
            SortType::DateNewest => "Newest First",
            SortType::DateOldest => "Oldest First",
            SortType::MaterialType => "Material Type",
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, SortType::Manual)
    }

    pub fn variants() -> &'static [SortType] {
        &[
            SortType::Manual,
            SortType::AlphabeticalAsc,
            SortType::AlphabeticalDesc,
            SortType::ElectronicFirstAlphaAsc,
            SortType::ElectronicFirstAlphaDesc,
            SortType::PrintFirstAlphaAsc,
            SortType::PrintFirstAlphaDesc,
            SortType::DateNewest,
            SortType::DateOldest,
            SortType::MaterialType,
        ]
    }
}

impl std::fmt::Display for SortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortType {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortType::variants()
            .iter()
            .copied()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| ReorderError::InvalidSortType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_round_trip_through_from_str() {
        for sort in SortType::variants() {
            assert_eq!(sort.as_str().parse::<SortType>().unwrap(), *sort);
        }
    }

    #[test]
    fn serde_uses_the_same_strings() {
        let json = serde_json::to_string(&SortType::ElectronicFirstAlphaDesc).unwrap();
        assert_eq!(json, "\"electronic-first-alpha-desc\"");
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert_eq!(
            "shuffle".parse::<SortType>(),
            Err(ReorderError::InvalidSortType("shuffle".into()))
        );
    }
}
