//! Drag session - pointer gestures mapped to list moves.
//!
//! Independent of any drag library: pointer-down starts a session on a row,
//! every pointer-over moves the dragged row to the hovered index right away so
//! the table can render the live position, and pointer-up ends the session.
//! A cancelled session hands back the list as it was at pointer-down.

use crate::common::ResourceKey;
use crate::domains::reserves::models::Resource;

#[derive(Debug, Clone)]
pub struct DragSession {
    key: ResourceKey,
    origin: usize,
    current: usize,
    snapshot: Vec<Resource>,
}

impl DragSession {
    /// Start dragging the row at `index`; `None` when the index is out of range.
    pub fn start(resources: &[Resource], index: usize) -> Option<Self> {
        let key = resources.get(index)?.key();
        Some(Self {
            key,
            origin: index,
            current: index,
            snapshot: resources.to_vec(),
        })
    }

    /// Move the dragged row to `index` in `resources`. Returns whether it moved.
    ///
    /// Hover indices past the end pin the row to the last slot.
    pub fn hover(&mut self, resources: &mut Vec<Resource>, index: usize) -> bool {
        if resources.is_empty() {
            return false;
        }
        let target = index.min(resources.len() - 1);
        if target == self.current {
            return false;
        }
        let item = resources.remove(self.current);
        resources.insert(target, item);
        self.current = target;
        true
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the row ended somewhere other than where it started.
    pub fn moved(&self) -> bool {
        self.current != self.origin
    }

    /// The list as it was when the drag started.
    pub fn into_snapshot(self) -> Vec<Resource> {
        self.snapshot
    }
}
