//! Step-at-a-time traversal over a structure.
//!
//! A [`TraversalController`] holds a snapshot of node handles in visiting
//! order and a cursor into it. The user advances the cursor one node per
//! step; running off the end drops back to idle so the next step starts a
//! fresh pass.
//!
//! The snapshot remembers the structure revision it was taken from. Any
//! mutation bumps the revision, and a snapshot whose revision no longer
//! matches is never dereferenced: stepping rebuilds it, and
//! [`TraversalController::current`] reports it as stale.

use crate::arena::NodeHandle;
use crate::error::{Result, VisError};

/// A structure whose nodes can be visited in a fixed order
pub trait Traversable {
    /// Counter bumped on every mutation
    fn revision(&self) -> u64;

    /// Handles in visiting order, computed from the current structure
    fn traversal_order(&self) -> Vec<NodeHandle>;

    /// Record visit progress on a node. Structures without a visited flag ignore it.
    fn set_visited(&mut self, _handle: NodeHandle, _visited: bool) {}
}

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// No pass running; the next step starts from the first node
    Idle,
    /// The node at `cursor` is the most recently visited one
    InProgress { cursor: usize },
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Visited `handle`, the `index`-th node of a pass over `len` nodes
    Visited {
        handle: NodeHandle,
        index: usize,
        len: usize,
    },
    /// The previous step visited the last node; the controller is idle again
    Completed,
    /// There is nothing to traverse
    Empty,
}

#[derive(Debug, Default)]
pub struct TraversalController {
    order: Vec<NodeHandle>,
    cursor: Option<usize>,
    built_at: Option<u64>,
}

impl TraversalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TraversalState {
        match self.cursor {
            Some(cursor) => TraversalState::InProgress { cursor },
            None => TraversalState::Idle,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn order(&self) -> &[NodeHandle] {
        &self.order
    }

    /// Whether the held snapshot was taken before the structure last changed
    pub fn is_stale<S: Traversable + ?Sized>(&self, source: &S) -> bool {
        self.built_at.is_some_and(|rev| rev != source.revision())
    }

    /// Drop the snapshot and return to idle, clearing visit marks it left behind
    pub fn reset<S: Traversable + ?Sized>(&mut self, source: &mut S) {
        for handle in self.order.drain(..) {
            source.set_visited(handle, false);
        }
        self.cursor = None;
        self.built_at = None;
    }

    /// Advance one node
    pub fn step<S: Traversable + ?Sized>(&mut self, source: &mut S) -> StepOutcome {
        if self.is_stale(source) {
            tracing::debug!(
                built = ?self.built_at,
                current = source.revision(),
                "Traversal snapshot outdated, rebuilding"
            );
            self.reset(source);
        }

        if self.cursor.is_none() {
            self.reset(source);
            self.order = source.traversal_order();
            self.built_at = Some(source.revision());
        }

        let len = self.order.len();
        if len == 0 {
            return StepOutcome::Empty;
        }

        let next = self.cursor.map_or(0, |c| c + 1);
        if next < len {
            let handle = self.order[next];
            self.cursor = Some(next);
            source.set_visited(handle, true);
            StepOutcome::Visited {
                handle,
                index: next,
                len,
            }
        } else {
            self.cursor = None;
            StepOutcome::Completed
        }
    }

    /// The most recently visited node, if a pass is running
    ///
    /// Fails with [`VisError::StaleTraversalSnapshot`] when the structure
    /// changed since the snapshot was taken.
    pub fn current<S: Traversable + ?Sized>(&self, source: &S) -> Result<Option<NodeHandle>> {
        if let Some(built) = self.built_at {
            let current = source.revision();
            if built != current {
                return Err(VisError::StaleTraversalSnapshot { built, current });
            }
        }
        Ok(self.cursor.and_then(|c| self.order.get(c).copied()))
    }
}
