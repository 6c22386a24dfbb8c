//! Sort engine behaviour across every sort mode.

mod common;

use common::*;
use reserves_core::domains::reserves::{
    apply_sort_order, is_manual_sort, sort_resources, ElectronicResource, Resource, ResourceType,
    SortType,
};

fn mixed() -> Vec<Resource> {
    vec![
        e(1, "zebra studies"),
        p("a", "Apple Orchards"),
        e(2, "Mango Trade"),
        p("b", "banana republics"),
        e(3, "Cherry Blossoms"),
    ]
}

#[test]
fn alphabetical_asc_mixes_types_case_insensitively() {
    let resources = vec![
        Resource::Electronic(ElectronicResource {
            resource_id: 1,
            course_resource_id: 1,
            name: Some("Zebra".into()),
            order: Some(999),
            ..Default::default()
        }),
        p("1", "Apple"),
    ];

    let sorted = sort_resources(&resources, SortType::AlphabeticalAsc);

    assert_eq!(keys(&sorted), vec!["p-1", "e-1"]);
}

#[test]
fn sorting_does_not_touch_input_or_orders() {
    let resources = mixed();
    let before = resources.clone();

    let sorted = sort_resources(&resources, SortType::AlphabeticalAsc);

    assert_eq!(resources, before);
    assert!(sorted.iter().all(|r| r.order().is_none()));
}

#[test]
fn missing_titles_sort_first_ascending() {
    let mut untitled = ElectronicResource {
        resource_id: 9,
        ..Default::default()
    };
    untitled.name = None;
    let resources = vec![p("a", "Alpha"), Resource::Electronic(untitled)];

    let sorted = sort_resources(&resources, SortType::AlphabeticalAsc);

    assert_eq!(keys(&sorted), vec!["e-9", "p-a"]);
}

#[test]
fn ascending_then_descending_reverses_distinct_titles() {
    let asc = sort_resources(&mixed(), SortType::AlphabeticalAsc);
    let desc = sort_resources(&asc, SortType::AlphabeticalDesc);

    let mut reversed = keys(&asc);
    reversed.reverse();
    assert_eq!(keys(&desc), reversed);
}

#[test]
fn equal_titles_keep_original_order() {
    let resources = vec![p("x", "Same"), e(1, "same"), p("y", "SAME")];

    assert_eq!(
        keys(&sort_resources(&resources, SortType::AlphabeticalAsc)),
        vec!["p-x", "e-1", "p-y"]
    );
    assert_eq!(
        keys(&sort_resources(&resources, SortType::AlphabeticalDesc)),
        vec!["p-x", "e-1", "p-y"]
    );
}

#[test]
fn electronic_first_groups_then_alphabetizes() {
    let sorted = sort_resources(&mixed(), SortType::ElectronicFirstAlphaAsc);
    assert_eq!(keys(&sorted), vec!["e-3", "e-2", "e-1", "p-a", "p-b"]);

    let first_print = sorted
        .iter()
        .position(|r| r.resource_type() == ResourceType::Print)
        .unwrap();
    assert!(sorted[first_print..]
        .iter()
        .all(|r| r.resource_type() == ResourceType::Print));

    let desc = sort_resources(&mixed(), SortType::ElectronicFirstAlphaDesc);
    assert_eq!(keys(&desc), vec!["e-1", "e-2", "e-3", "p-b", "p-a"]);
}

#[test]
fn print_first_groups_then_alphabetizes() {
    let asc = sort_resources(&mixed(), SortType::PrintFirstAlphaAsc);
    assert_eq!(keys(&asc), vec!["p-a", "p-b", "e-3", "e-2", "e-1"]);

    let desc = sort_resources(&mixed(), SortType::PrintFirstAlphaDesc);
    assert_eq!(keys(&desc), vec!["p-b", "p-a", "e-1", "e-2", "e-3"]);
}

#[test]
fn date_sorts_use_each_types_timestamp() {
    let resources = vec![
        dated_electronic(1, "Old", "2020-01-01T00:00:00Z"),
        dated_print("a", "Newest", "2024-06-01T12:00:00.000+0000"),
        e(2, "Undated"),
        dated_print("b", "Middle", "2022-03-15"),
    ];

    assert_eq!(
        keys(&sort_resources(&resources, SortType::DateNewest)),
        vec!["p-a", "p-b", "e-1", "e-2"]
    );
    assert_eq!(
        keys(&sort_resources(&resources, SortType::DateOldest)),
        vec!["e-2", "e-1", "p-b", "p-a"]
    );
}

#[test]
fn material_type_groups_print_as_books() {
    let mut video = ElectronicResource {
        resource_id: 5,
        name: Some("Documentary".into()),
        material_type_name: Some("Video".into()),
        ..Default::default()
    };
    video.course_resource_id = 50;
    let resources = vec![
        Resource::Electronic(video),
        p("a", "Zoology"),
        e(1, "Beta Article"),
        p("b", "Anatomy"),
        e(2, "Alpha Article"),
    ];

    let sorted = sort_resources(&resources, SortType::MaterialType);

    // Article < Book < Video, titles ascending within each group
    assert_eq!(keys(&sorted), vec!["e-2", "e-1", "p-b", "p-a", "e-5"]);
}

#[test]
fn manual_puts_unordered_records_last() {
    let resources = vec![
        Resource::Print(print("a", "A", Some(999))),
        Resource::Electronic(electronic(1, "B", Some(12))),
        Resource::Print(print("b", "C", None)),
        Resource::Electronic(electronic(2, "D", Some(3))),
    ];

    let sorted = sort_resources(&resources, SortType::Manual);

    assert_eq!(keys(&sorted), vec!["e-2", "e-1", "p-a", "p-b"]);
}

#[test]
fn non_manual_sorts_are_idempotent() {
    for sort in SortType::variants().iter().filter(|s| !s.is_manual()) {
        let once = sort_resources(&mixed(), *sort);
        let twice = sort_resources(&once, *sort);
        assert_eq!(keys(&once), keys(&twice), "sort {} not idempotent", sort);
    }
}

#[test]
fn apply_sort_order_stamps_dense_positions() {
    for sort in SortType::variants() {
        let stamped = apply_sort_order(&mixed(), *sort);
        for (i, resource) in stamped.iter().enumerate() {
            assert_eq!(resource.order(), Some(i as u32 + 1), "sort {}", sort);
        }
    }
}

#[test]
fn only_manual_is_manual() {
    assert!(is_manual_sort(SortType::Manual));
    for sort in SortType::variants().iter().filter(|s| **s != SortType::Manual) {
        assert!(!is_manual_sort(*sort));
    }
}

#[test]
fn sort_modes_parse_from_dropdown_values() {
    let parsed: SortType = "electronic-first-alpha-asc".parse().unwrap();
    assert_eq!(parsed, SortType::ElectronicFirstAlphaAsc);
    assert!("not-a-sort".parse::<SortType>().is_err());
}
