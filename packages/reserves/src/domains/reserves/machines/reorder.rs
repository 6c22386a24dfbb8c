//! Reorder controller - the reserves table's ordering state.
//!
//! Holds the displayed list, the selection, and whether local edits are still
//! unsaved. Every operation is synchronous and pure; the one IO step, sending
//! the order to the backend, is split into `begin_commit` (hand out the
//! payload) and `complete_commit` (apply the outcome) so the effect layer can
//! await the sink in between.
//!
//! # Source arrays vs. local edits
//!
//! The list is derived from the electronic and print arrays the host loads.
//! While local edits are pending (or a drag is in progress) newly loaded
//! arrays are held back instead of replacing the list. They are applied after
//! a successful commit, keeping the committed positions, or when the edits are
//! discarded.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::common::{ReorderError, ResourceKey, Result};
use crate::config::Config;
use crate::domains::reserves::actions::{self, display_order, same_arrangement, stamp_order};
use crate::domains::reserves::data::ReorderPayload;
use crate::domains::reserves::events::{MoveKind, ReorderEvent};
use crate::domains::reserves::machines::drag::DragSession;
use crate::domains::reserves::models::{ElectronicResource, PrintResource, Resource, SortType};

/// Electronic and print arrays as last loaded by the host
#[derive(Debug, Clone, Default)]
struct SourceSnapshot {
    electronic: Vec<ElectronicResource>,
    print: Vec<PrintResource>,
}

impl SourceSnapshot {
    fn combined(&self) -> Vec<Resource> {
        self.electronic
            .iter()
            .cloned()
            .map(Resource::from)
            .chain(self.print.iter().cloned().map(Resource::from))
            .collect()
    }
}

/// Commit handed out by `begin_commit` and not yet resolved
#[derive(Debug, Clone)]
struct InFlightCommit {
    revision: u64,
    keys: Vec<ResourceKey>,
}

#[derive(Debug)]
pub struct ReorderController {
    course_id: String,
    resources: Vec<Resource>,
    selected: HashSet<ResourceKey>,
    current_sort: SortType,
    has_pending_changes: bool,
    sources: SourceSnapshot,
    sources_deferred: bool,
    drag: Option<DragSession>,
    in_flight: Option<InFlightCommit>,
    /// Bumped on every local edit so a commit can tell if it is still current.
    revision: u64,
    last_error: Option<String>,
    events: Vec<ReorderEvent>,
}

impl ReorderController {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self::with_sort(course_id, SortType::Manual)
    }

    pub fn with_sort(course_id: impl Into<String>, sort: SortType) -> Self {
        Self {
            course_id: course_id.into(),
            resources: Vec::new(),
            selected: HashSet::new(),
            current_sort: sort,
            has_pending_changes: false,
            sources: SourceSnapshot::default(),
            sources_deferred: false,
            drag: None,
            in_flight: None,
            revision: 0,
            last_error: None,
            events: Vec::new(),
        }
    }

    pub fn from_config(course_id: impl Into<String>, config: &Config) -> Self {
        Self::with_sort(course_id, config.default_sort)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn current_sort(&self) -> SortType {
        self.current_sort
    }

    pub fn has_pending_changes(&self) -> bool {
        self.has_pending_changes
    }

    pub fn is_updating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drag-and-drop and bulk moves only apply to the manual order.
    pub fn is_reorder_enabled(&self) -> bool {
        actions::is_manual_sort(self.current_sort)
    }

    /// Whether the "Update Order" action should be offered.
    pub fn can_commit(&self) -> bool {
        self.has_pending_changes && !self.resources.is_empty() && self.in_flight.is_none()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<ReorderEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// Load the source arrays, rebuilding the list unless local edits would be lost.
    pub fn load_sources(&mut self, electronic: Vec<ElectronicResource>, print: Vec<PrintResource>) {
        self.sources = SourceSnapshot { electronic, print };

        if self.has_pending_changes || self.drag.is_some() {
            warn!(
                course_id = %self.course_id,
                "Holding back reloaded resources while local order changes are pending"
            );
            self.sources_deferred = true;
            self.events.push(ReorderEvent::SourcesDeferred);
            return;
        }

        self.rebuild_from_sources(None);
    }

    fn rebuild_from_sources(&mut self, committed: Option<&[ResourceKey]>) {
        let mut combined = self.sources.combined();

        if let Some(keys) = committed {
            let positions: HashMap<&ResourceKey, u32> = keys
                .iter()
                .enumerate()
                .map(|(i, key)| (key, i as u32 + 1))
                .collect();
            for resource in combined.iter_mut() {
                match positions.get(&resource.key()) {
                    Some(&position) => resource.set_order(position),
                    None => clear_order(resource),
                }
            }
        }

        self.resources = display_order(&combined, self.current_sort);
        self.sources_deferred = false;

        let present: HashSet<ResourceKey> = self.resources.iter().map(Resource::key).collect();
        self.selected.retain(|key| present.contains(key));

        debug!(
            course_id = %self.course_id,
            sort = %self.current_sort,
            count = self.resources.len(),
            "Rebuilt resource list from sources"
        );
        self.events.push(ReorderEvent::SourcesApplied {
            count: self.resources.len(),
        });
    }

    /// Drop local edits and go back to the last loaded sources in manual order.
    pub fn discard_changes(&mut self) -> Result<()> {
        if self.in_flight.is_some() {
            return Err(ReorderError::CommitInProgress);
        }

        self.drag = None;
        self.has_pending_changes = false;
        self.current_sort = SortType::Manual;
        self.revision += 1;
        self.last_error = None;
        self.rebuild_from_sources(None);

        info!(course_id = %self.course_id, "Discarded local order changes");
        self.events.push(ReorderEvent::ChangesDiscarded);
        Ok(())
    }

    // =========================================================================
    // Sort mode
    // =========================================================================

    /// Switch the sort mode.
    ///
    /// A derived mode reorders the current list and leaves it pending, since it
    /// only becomes the course's manual order once committed. Switching back to
    /// manual rebuilds the saved order from the sources, unless local edits are
    /// pending, in which case the displayed list becomes the draft manual order.
    pub fn set_sort(&mut self, sort: SortType) {
        if let Some(drag) = self.drag.take() {
            self.resources = drag.into_snapshot();
            self.apply_deferred_if_clean();
        }
        if sort == self.current_sort {
            return;
        }

        self.current_sort = sort;
        if sort.is_manual() {
            if self.has_pending_changes {
                stamp_order(&mut self.resources);
            } else {
                self.rebuild_from_sources(None);
            }
        } else {
            self.resources = actions::apply_sort_order(&self.resources, sort);
            self.mark_pending();
        }

        info!(course_id = %self.course_id, sort = %sort, "Sort mode changed");
        self.events.push(ReorderEvent::SortChanged { sort });
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected(&self) -> &HashSet<ResourceKey> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, key: &ResourceKey) -> bool {
        self.selected.contains(key)
    }

    /// Flip selection of a row. Returns whether the row is now selected.
    pub fn toggle_selection(&mut self, key: &ResourceKey) -> Result<bool> {
        self.ensure_known(key)?;
        if self.selected.remove(key) {
            Ok(false)
        } else {
            self.selected.insert(key.clone());
            Ok(true)
        }
    }

    pub fn select(&mut self, key: &ResourceKey) -> Result<()> {
        self.ensure_known(key)?;
        self.selected.insert(key.clone());
        Ok(())
    }

    pub fn deselect(&mut self, key: &ResourceKey) {
        self.selected.remove(key);
    }

    pub fn select_all(&mut self) {
        self.selected = self.resources.iter().map(Resource::key).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn ensure_known(&self, key: &ResourceKey) -> Result<()> {
        if self.resources.iter().any(|r| &r.key() == key) {
            Ok(())
        } else {
            Err(ReorderError::UnknownResource(key.to_string()))
        }
    }

    // =========================================================================
    // Bulk moves
    // =========================================================================

    pub fn move_to_top(&mut self) -> Result<bool> {
        self.block_move(MoveKind::ToTop, |list, sel| actions::move_to_top(list, sel))
    }

    pub fn move_to_bottom(&mut self) -> Result<bool> {
        self.block_move(MoveKind::ToBottom, |list, sel| actions::move_to_bottom(list, sel))
    }

    pub fn move_after(&mut self, target: &ResourceKey) -> Result<bool> {
        self.block_move(MoveKind::After, |list, sel| {
            actions::move_after(list, sel, target)
        })
    }

    /// Move the selection so it starts at 1-based `position`.
    pub fn move_to_position(&mut self, position: usize) -> Result<bool> {
        self.block_move(MoveKind::ToPosition, |list, sel| {
            actions::move_to_position(list, sel, position)
        })
    }

    pub fn move_up(&mut self) -> Result<bool> {
        self.nudge(MoveKind::Up, |list, sel| actions::move_up(list, sel))
    }

    pub fn move_down(&mut self) -> Result<bool> {
        self.nudge(MoveKind::Down, |list, sel| actions::move_down(list, sel))
    }

    /// Block moves clear the selection afterwards.
    fn block_move<F>(&mut self, kind: MoveKind, op: F) -> Result<bool>
    where
        F: FnOnce(&[Resource], &HashSet<ResourceKey>) -> Vec<Resource>,
    {
        let moved = self.run_move(kind, op)?;
        self.selected.clear();
        Ok(moved)
    }

    /// Nudges keep the selection so repeated clicks keep moving the same rows.
    fn nudge<F>(&mut self, kind: MoveKind, op: F) -> Result<bool>
    where
        F: FnOnce(&[Resource], &HashSet<ResourceKey>) -> Vec<Resource>,
    {
        self.run_move(kind, op)
    }

    fn run_move<F>(&mut self, kind: MoveKind, op: F) -> Result<bool>
    where
        F: FnOnce(&[Resource], &HashSet<ResourceKey>) -> Vec<Resource>,
    {
        self.ensure_manual()?;
        self.ensure_not_dragging()?;
        if self.selected.is_empty() {
            return Ok(false);
        }

        let next = op(&self.resources, &self.selected);
        if same_arrangement(&next, &self.resources) {
            debug!(course_id = %self.course_id, ?kind, "Move left order unchanged");
            return Ok(false);
        }

        let moved = self.selected.len();
        self.commit_local(next, kind, moved);
        Ok(true)
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Pointer-down on the row at `index`. Replaces any unfinished drag.
    pub fn begin_drag(&mut self, index: usize) -> Result<()> {
        self.ensure_manual()?;
        if let Some(previous) = self.drag.take() {
            self.resources = previous.into_snapshot();
            self.apply_deferred_if_clean();
        }
        let session = DragSession::start(&self.resources, index).ok_or(
            ReorderError::IndexOutOfRange {
                index,
                len: self.resources.len(),
            },
        )?;
        debug!(course_id = %self.course_id, key = %session.key(), index, "Drag started");
        self.drag = Some(session);
        Ok(())
    }

    /// Pointer-over `index`. Moves the dragged row immediately.
    pub fn drag_over(&mut self, index: usize) -> Result<bool> {
        let session = self.drag.as_mut().ok_or(ReorderError::NoActiveDrag)?;
        Ok(session.hover(&mut self.resources, index))
    }

    /// Pointer-up. Returns whether the dragged row changed position.
    pub fn end_drag(&mut self) -> Result<bool> {
        let session = self.drag.take().ok_or(ReorderError::NoActiveDrag)?;

        if !session.moved() {
            self.resources = session.into_snapshot();
            self.apply_deferred_if_clean();
            return Ok(false);
        }

        debug!(
            course_id = %self.course_id,
            key = %session.key(),
            from = session.origin(),
            to = session.current(),
            "Drag finished"
        );
        let next = std::mem::take(&mut self.resources);
        self.commit_local(next, MoveKind::Drag, 1);
        Ok(true)
    }

    /// Abandon the drag and restore the list from pointer-down.
    pub fn cancel_drag(&mut self) -> Result<()> {
        let session = self.drag.take().ok_or(ReorderError::NoActiveDrag)?;
        self.resources = session.into_snapshot();
        self.apply_deferred_if_clean();
        Ok(())
    }

    /// Single-step drag: move the row at `from` to `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<bool> {
        self.ensure_manual()?;
        self.ensure_not_dragging()?;
        let len = self.resources.len();
        for index in [from, to] {
            if index >= len {
                return Err(ReorderError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(false);
        }

        let next = actions::move_item(&self.resources, from, to);
        self.commit_local(next, MoveKind::Drag, 1);
        Ok(true)
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Start a commit: mark the controller as updating and hand out the payload.
    pub fn begin_commit(&mut self) -> Result<ReorderPayload> {
        if self.in_flight.is_some() {
            return Err(ReorderError::CommitInProgress);
        }
        if !self.has_pending_changes || self.resources.is_empty() {
            return Err(ReorderError::NothingToCommit);
        }

        self.in_flight = Some(InFlightCommit {
            revision: self.revision,
            keys: self.resources.iter().map(Resource::key).collect(),
        });
        Ok(ReorderPayload::from_resources(&self.resources))
    }

    /// Apply the sink's outcome for the commit started by `begin_commit`.
    ///
    /// Success resets the sort mode to manual and clears pending changes unless
    /// the list was edited while the commit was in flight. Failure keeps
    /// everything pending for a retry.
    pub fn complete_commit(&mut self, outcome: anyhow::Result<()>) -> Result<()> {
        let in_flight = self.in_flight.take().ok_or(ReorderError::NothingToCommit)?;

        match outcome {
            Ok(()) => {
                self.current_sort = SortType::Manual;
                self.last_error = None;

                if in_flight.revision == self.revision {
                    self.has_pending_changes = false;
                    if self.sources_deferred && self.drag.is_none() {
                        self.rebuild_from_sources(Some(in_flight.keys.as_slice()));
                    }
                } else {
                    warn!(
                        course_id = %self.course_id,
                        "Order changed while the update was in flight; keeping changes pending"
                    );
                }

                info!(
                    course_id = %self.course_id,
                    count = in_flight.keys.len(),
                    "Resource order updated"
                );
                self.events.push(ReorderEvent::OrderCommitted {
                    count: in_flight.keys.len(),
                });
                Ok(())
            }
            Err(err) => {
                let message = format!("{:#}", err);
                warn!(course_id = %self.course_id, error = %message, "Failed to update resource order");
                self.last_error = Some(message.clone());
                self.events.push(ReorderEvent::CommitFailed {
                    message: message.clone(),
                });
                Err(ReorderError::CommitFailed(message))
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_manual(&self) -> Result<()> {
        if self.is_reorder_enabled() {
            Ok(())
        } else {
            Err(ReorderError::ManualSortRequired)
        }
    }

    /// Moves rewrite the list under an active drag session, so they wait for pointer-up.
    fn ensure_not_dragging(&self) -> Result<()> {
        if self.drag.is_some() {
            Err(ReorderError::DragInProgress)
        } else {
            Ok(())
        }
    }

    fn commit_local(&mut self, mut next: Vec<Resource>, kind: MoveKind, moved: usize) {
        stamp_order(&mut next);
        self.resources = next;
        self.mark_pending();
        debug!(course_id = %self.course_id, ?kind, moved, "Resource order changed locally");
        self.events.push(ReorderEvent::OrderChanged { kind, moved });
    }

    fn mark_pending(&mut self) {
        self.has_pending_changes = true;
        self.revision += 1;
    }

    fn apply_deferred_if_clean(&mut self) {
        if self.sources_deferred && !self.has_pending_changes {
            self.rebuild_from_sources(None);
        }
    }
}

fn clear_order(resource: &mut Resource) {
    match resource {
        Resource::Electronic(e) => e.order = None,
        Resource::Print(p) => p.order = None,
    }
}
