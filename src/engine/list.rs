//! Singly linked list engine

use crate::animation::{Ease, Motion};
use crate::arena::{Arena, NodeHandle};
use crate::layout::ListLayout;
use crate::traversal::Traversable;
use crate::types::{Point, StructureKind};
use crate::view::{EdgeKind, EdgeView, ElementKey, ElementView, FrameView};

/// One list cell
#[derive(Debug, Clone)]
pub struct ListNode {
    pub value: i32,
    next: Option<NodeHandle>,
    pub motion: Motion,
}

impl ListNode {
    pub fn next(&self) -> Option<NodeHandle> {
        self.next
    }
}

/// Linked list of integers, head to tail.
///
/// The chain is stored as handle links in an arena; a node is reachable only
/// through its predecessor (or `head`), and removing it frees its slot.
#[derive(Debug, Default)]
pub struct ListEngine {
    arena: Arena<ListNode>,
    head: Option<NodeHandle>,
    revision: u64,
    spawn: Point,
}

impl ListEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where newly created nodes are first drawn
    pub fn set_spawn(&mut self, spawn: Point) {
        self.spawn = spawn;
    }

    pub fn head(&self) -> Option<NodeHandle> {
        self.head
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&ListNode> {
        self.arena.get(handle)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn next_of(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.arena.get(handle).and_then(|n| n.next)
    }

    fn alloc(&mut self, value: i32, next: Option<NodeHandle>) -> NodeHandle {
        self.revision += 1;
        self.arena.insert(ListNode {
            value,
            next,
            motion: Motion::at_rest(self.spawn),
        })
    }

    /// Link a new node in front of the current head. O(1).
    pub fn insert_at_head(&mut self, value: i32) -> NodeHandle {
        let handle = self.alloc(value, self.head);
        self.head = Some(handle);
        tracing::debug!(value, len = self.len(), "List insert at head");
        handle
    }

    /// Append a new node after the last one. O(n).
    pub fn insert_at_tail(&mut self, value: i32) -> NodeHandle {
        let last = self.last();
        let handle = self.alloc(value, None);
        match last.and_then(|h| self.arena.get_mut(h)) {
            Some(node) => node.next = Some(handle),
            None => self.head = Some(handle),
        }
        tracing::debug!(value, len = self.len(), "List insert at tail");
        handle
    }

    /// Unlink and free the last node, returning its value. O(n).
    ///
    /// Returns `None` (and changes nothing) on an empty list.
    pub fn remove_tail(&mut self) -> Option<i32> {
        let head = self.head?;
        let removed = match self.next_of(head) {
            None => {
                self.head = None;
                self.arena.remove(head)
            }
            Some(mut last) => {
                let mut prev = head;
                while let Some(next) = self.next_of(last) {
                    prev = last;
                    last = next;
                }
                if let Some(node) = self.arena.get_mut(prev) {
                    node.next = None;
                }
                self.arena.remove(last)
            }
        }?;

        self.revision += 1;
        tracing::debug!(value = removed.value, len = self.len(), "List remove tail");
        Some(removed.value)
    }

    /// Free every node
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.revision += 1;
        tracing::debug!("List cleared");
    }

    fn last(&self) -> Option<NodeHandle> {
        let mut current = self.head?;
        while let Some(next) = self.next_of(current) {
            current = next;
        }
        Some(current)
    }

    /// Handles from head to tail, computed fresh on every call
    pub fn nodes_in_order(&self) -> Vec<NodeHandle> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut current = self.head;
        while let Some(handle) = current {
            // a chain longer than the arena would mean a cycle
            if out.len() >= self.arena.len() {
                break;
            }
            out.push(handle);
            current = self.next_of(handle);
        }
        out
    }

    /// Values from head to tail
    pub fn values(&self) -> Vec<i32> {
        self.nodes_in_order()
            .into_iter()
            .filter_map(|h| self.arena.get(h).map(|n| n.value))
            .collect()
    }

    /// Point every node at its grid slot
    pub fn relayout(&mut self, layout: &ListLayout) {
        for (index, handle) in self.nodes_in_order().into_iter().enumerate() {
            if let Some(node) = self.arena.get_mut(handle) {
                node.motion.retarget(layout.target(index));
            }
        }
    }

    /// Advance all node positions. Returns true while anything moves.
    pub fn tick(&mut self, dt: f32, ease: Ease) -> bool {
        let mut moving = false;
        for node in self.arena.values_mut() {
            moving |= node.motion.tick(dt, ease);
        }
        moving
    }

    /// Frame snapshot, highlighting `current` if it is a live node
    pub fn view(&self, current: Option<NodeHandle>) -> FrameView {
        let mut frame = FrameView::new(StructureKind::LinkedList);
        for handle in self.nodes_in_order() {
            let Some(node) = self.arena.get(handle) else {
                continue;
            };
            let index = frame.elements.len();
            if index > 0 {
                frame.edges.push(EdgeView {
                    from: index - 1,
                    to: index,
                    kind: EdgeKind::Next,
                });
            }
            frame.elements.push(ElementView {
                key: ElementKey::Node(handle),
                value: node.value,
                position: node.motion.position,
                highlighted: current == Some(handle),
            });
        }
        frame
    }
}

impl Traversable for ListEngine {
    fn revision(&self) -> u64 {
        self.revision
    }

    fn traversal_order(&self) -> Vec<NodeHandle> {
        self.nodes_in_order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_inserts_then_remove() {
        let mut list = ListEngine::new();
        list.insert_at_tail(1);
        list.insert_at_tail(2);
        list.insert_at_tail(3);
        assert_eq!(list.values(), vec![1, 2, 3]);

        assert_eq!(list.remove_tail(), Some(3));
        assert_eq!(list.values(), vec![1, 2]);
    }

    #[test]
    fn test_head_inserts_reverse() {
        let mut list = ListEngine::new();
        for v in 1..=4 {
            list.insert_at_head(v);
        }
        assert_eq!(list.values(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_mixed_inserts() {
        let mut list = ListEngine::new();
        list.insert_at_tail(2);
        list.insert_at_head(1);
        list.insert_at_tail(3);
        assert_eq!(list.values(), vec![1, 2, 3]);
        let order = list.nodes_in_order();
        assert_eq!(list.head(), Some(order[0]));
        assert_eq!(list.get(order[2]).and_then(|n| n.next()), None);
    }

    #[test]
    fn test_remove_until_empty() {
        let mut list = ListEngine::new();
        list.insert_at_tail(1);
        list.insert_at_tail(2);
        assert_eq!(list.remove_tail(), Some(2));
        assert_eq!(list.remove_tail(), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.remove_tail(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut list = ListEngine::new();
        list.insert_at_tail(1);
        let tail = list.insert_at_tail(2);
        list.remove_tail();
        assert!(list.get(tail).is_none());
    }

    #[test]
    fn test_clear() {
        let mut list = ListEngine::new();
        let handles: Vec<_> = (0..5).map(|v| list.insert_at_tail(v)).collect();
        list.clear();
        assert!(list.is_empty());
        assert!(list.nodes_in_order().is_empty());
        assert!(handles.iter().all(|h| list.get(*h).is_none()));
    }

    #[test]
    fn test_revision_moves_on_mutation_only() {
        let mut list = ListEngine::new();
        let r0 = list.revision();
        list.insert_at_head(1);
        let r1 = list.revision();
        assert_ne!(r0, r1);
        let _ = list.values();
        assert_eq!(list.revision(), r1);
        list.remove_tail();
        assert_ne!(list.revision(), r1);

        // removing from an empty list is a no-op
        let r2 = list.revision();
        list.remove_tail();
        assert_eq!(list.revision(), r2);
    }

    #[test]
    fn test_relayout_and_tick() {
        let layout = ListLayout::default();
        let mut list = ListEngine::new();
        list.set_spawn(layout.target(0));
        for v in 0..8 {
            list.insert_at_tail(v);
        }
        list.relayout(&layout);

        assert!(!list.tick(1.0, Ease::new(5.0)));
        let view = list.view(None);
        for (i, element) in view.elements.iter().enumerate() {
            assert_eq!(element.position, layout.target(i));
        }
        assert_eq!(view.edges.len(), 7);
    }

    #[test]
    fn test_view_highlight() {
        let mut list = ListEngine::new();
        list.insert_at_tail(1);
        let second = list.insert_at_tail(2);
        let view = list.view(Some(second));
        let lit: Vec<_> = view.highlighted().map(|e| e.value).collect();
        assert_eq!(lit, vec![2]);
    }
}
