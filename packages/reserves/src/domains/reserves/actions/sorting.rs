//! Sort engine for the reserves table
//!
//! Pure functions over resource lists. Nothing here does IO and nothing here
//! fails: a record with a missing title sorts as the empty string and a record
//! with a missing date sorts as the epoch.

use std::cmp::Reverse;

use crate::domains::reserves::models::{Resource, ResourceType, SortType};

/// Return `resources` reordered by `sort_type`.
///
/// The input is left untouched and `order` fields are not reassigned. Every
/// strategy is stable, so records that compare equal keep their relative order.
pub fn sort_resources(resources: &[Resource], sort_type: SortType) -> Vec<Resource> {
    match sort_type {
        SortType::Manual => sorted_by(resources, |r| r.manual_rank()),
        SortType::AlphabeticalAsc => sorted_by(resources, title_key),
        SortType::AlphabeticalDesc => sorted_by(resources, |r| Reverse(title_key(r))),
        SortType::ElectronicFirstAlphaAsc => sorted_by(resources, |r| {
            (group_rank(r, ResourceType::Electronic), title_key(r))
        }),
        SortType::ElectronicFirstAlphaDesc => sorted_by(resources, |r| {
            (group_rank(r, ResourceType::Electronic), Reverse(title_key(r)))
        }),
        SortType::PrintFirstAlphaAsc => {
            sorted_by(resources, |r| (group_rank(r, ResourceType::Print), title_key(r)))
        }
        SortType::PrintFirstAlphaDesc => sorted_by(resources, |r| {
            (group_rank(r, ResourceType::Print), Reverse(title_key(r)))
        }),
        SortType::DateNewest => sorted_by(resources, |r| Reverse(r.created_at_millis())),
        SortType::DateOldest => sorted_by(resources, |r| r.created_at_millis()),
        SortType::MaterialType => sorted_by(resources, |r| {
            (fold_case(r.material_type()), title_key(r))
        }),
    }
}

/// Sort, then stamp every record with its new 1-based position.
pub fn apply_sort_order(resources: &[Resource], sort_type: SortType) -> Vec<Resource> {
    let mut sorted = sort_resources(resources, sort_type);
    stamp_order(&mut sorted);
    sorted
}

/// Whether drag-and-drop and bulk moves apply under `sort_type`.
pub fn is_manual_sort(sort_type: SortType) -> bool {
    sort_type.is_manual()
}

/// Rewrite `order` as 1..=N in list position.
pub fn stamp_order(resources: &mut [Resource]) {
    for (index, resource) in resources.iter_mut().enumerate() {
        resource.set_order(index as u32 + 1);
    }
}

/// Order used when a course has no manual positions yet.
///
/// Electronic resources come first, by `course_resource_id`. Print resources
/// follow, by their own `order` field. The two halves use different keys; this
/// matches what deployed courses already show.
pub fn default_order(resources: &[Resource]) -> Vec<Resource> {
    sorted_by(resources, |r| match r {
        Resource::Electronic(e) => (0u8, e.course_resource_id, 0u32),
        Resource::Print(_) => (1u8, 0, r.manual_rank()),
    })
}

/// Display order for a freshly loaded list under `sort_type`, stamped 1..=N.
///
/// Manual mode falls back to [`default_order`] when no record has been placed.
pub fn display_order(resources: &[Resource], sort_type: SortType) -> Vec<Resource> {
    if sort_type.is_manual() && !resources.iter().any(Resource::has_manual_order) {
        let mut ordered = default_order(resources);
        stamp_order(&mut ordered);
        return ordered;
    }
    apply_sort_order(resources, sort_type)
}

fn sorted_by<K, F>(resources: &[Resource], key: F) -> Vec<Resource>
where
    K: Ord,
    F: FnMut(&Resource) -> K,
{
    let mut sorted = resources.to_vec();
    // sort_by_cached_key is stable
    sorted.sort_by_cached_key(key);
    sorted
}

fn title_key(resource: &Resource) -> String {
    fold_case(resource.title())
}

fn fold_case(s: &str) -> String {
    s.trim().to_lowercase()
}

fn group_rank(resource: &Resource, first: ResourceType) -> u8 {
    if resource.resource_type() == first {
        0
    } else {
        1
    }
}
