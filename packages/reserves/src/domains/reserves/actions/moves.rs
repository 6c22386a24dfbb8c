//! Bulk move operations
//!
//! Each operation takes the displayed list and the current selection and
//! returns the rearranged list. Block moves split the list into the selected
//! rows (kept in their displayed relative order) and the rest, then splice the
//! block back in. Nudges swap selected rows with their neighbours.
//!
//! These functions only rearrange. Stamping `order` and flagging pending
//! changes is the controller's job.

use std::collections::HashSet;

use crate::common::ResourceKey;
use crate::domains::reserves::models::Resource;

/// Split into `(selected, others)`, both in displayed order.
pub fn partition(
    resources: &[Resource],
    selected: &HashSet<ResourceKey>,
) -> (Vec<Resource>, Vec<Resource>) {
    resources
        .iter()
        .cloned()
        .partition(|r| selected.contains(&r.key()))
}

pub fn move_to_top(resources: &[Resource], selected: &HashSet<ResourceKey>) -> Vec<Resource> {
    let (mut block, others) = partition(resources, selected);
    block.extend(others);
    block
}

pub fn move_to_bottom(resources: &[Resource], selected: &HashSet<ResourceKey>) -> Vec<Resource> {
    let (block, mut others) = partition(resources, selected);
    others.extend(block);
    others
}

/// Place the block right after `target`. A target that is missing or part of
/// the selection sends the block to the bottom.
pub fn move_after(
    resources: &[Resource],
    selected: &HashSet<ResourceKey>,
    target: &ResourceKey,
) -> Vec<Resource> {
    let (block, others) = partition(resources, selected);
    let at = others
        .iter()
        .position(|r| &r.key() == target)
        .map(|i| i + 1)
        .unwrap_or(others.len());
    splice_block(others, block, at)
}

/// Place the block so it starts at 1-based `position`, clamped to the list.
pub fn move_to_position(
    resources: &[Resource],
    selected: &HashSet<ResourceKey>,
    position: usize,
) -> Vec<Resource> {
    let (block, others) = partition(resources, selected);
    let position = position.clamp(1, resources.len().max(1));
    // The block must fit, so its start can be at most others.len().
    let at = (position - 1).min(others.len());
    splice_block(others, block, at)
}

/// Swap each selected row with the row above it.
///
/// Rows are processed top-down so a run of selected rows moves as a unit. If
/// the topmost selected row is already first, nothing moves.
pub fn move_up(resources: &[Resource], selected: &HashSet<ResourceKey>) -> Vec<Resource> {
    let mut list = resources.to_vec();
    let indices = selected_indices(&list, selected);
    if indices.first().is_some_and(|&first| first > 0) {
        for i in indices {
            list.swap(i - 1, i);
        }
    }
    list
}

/// Swap each selected row with the row below it, bottom-up.
pub fn move_down(resources: &[Resource], selected: &HashSet<ResourceKey>) -> Vec<Resource> {
    let mut list = resources.to_vec();
    let indices = selected_indices(&list, selected);
    if indices.last().is_some_and(|&last| last + 1 < list.len()) {
        for i in indices.into_iter().rev() {
            list.swap(i, i + 1);
        }
    }
    list
}

/// Remove the row at `from` and reinsert it at `to`.
///
/// Callers validate both indices against the list length.
pub fn move_item(resources: &[Resource], from: usize, to: usize) -> Vec<Resource> {
    let mut list = resources.to_vec();
    let item = list.remove(from);
    list.insert(to, item);
    list
}

/// True when both lists hold the same keys in the same order.
pub fn same_arrangement(a: &[Resource], b: &[Resource]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key() == y.key())
}

fn splice_block(mut others: Vec<Resource>, block: Vec<Resource>, at: usize) -> Vec<Resource> {
    let tail = others.split_off(at);
    others.extend(block);
    others.extend(tail);
    others
}

fn selected_indices(list: &[Resource], selected: &HashSet<ResourceKey>) -> Vec<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, r)| selected.contains(&r.key()))
        .map(|(i, _)| i)
        .collect()
}
