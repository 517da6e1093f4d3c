//! Binary search tree engine
//!
//! Insertion never rebalances. Values equal to a node's value are placed in
//! its right subtree, so duplicates are kept rather than rejected.
//!
//! All walks use explicit stacks; an adversarial insertion order produces a
//! list-shaped tree whose depth equals its size.

use std::collections::HashMap;

use crate::animation::{Ease, Motion};
use crate::arena::{Arena, NodeHandle};
use crate::layout::{Band, TreeLayout};
use crate::traversal::Traversable;
use crate::types::{Point, StructureKind};
use crate::view::{EdgeKind, EdgeView, ElementKey, ElementView, FrameView};

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: i32,
    left: Option<NodeHandle>,
    right: Option<NodeHandle>,
    pub motion: Motion,
    /// Reached by the running in-order traversal
    pub visited: bool,
}

impl TreeNode {
    pub fn left(&self) -> Option<NodeHandle> {
        self.left
    }

    pub fn right(&self) -> Option<NodeHandle> {
        self.right
    }
}

#[derive(Debug, Default)]
pub struct BstEngine {
    arena: Arena<TreeNode>,
    root: Option<NodeHandle>,
    revision: u64,
    spawn: Point,
}

impl BstEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where a new root is first drawn. Other nodes grow out of their parent.
    pub fn set_spawn(&mut self, spawn: Point) {
        self.spawn = spawn;
    }

    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&TreeNode> {
        self.arena.get(handle)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// (left, right) links of a node; both `None` for a stale handle
    pub fn children(&self, handle: NodeHandle) -> (Option<NodeHandle>, Option<NodeHandle>) {
        self.arena
            .get(handle)
            .map(|n| (n.left, n.right))
            .unwrap_or((None, None))
    }

    /// Attach a new node at the empty slot `value` routes to
    pub fn insert(&mut self, value: i32) -> NodeHandle {
        let mut parent: Option<(NodeHandle, bool, Point)> = None;
        let mut current = self.root;
        while let Some((handle, node)) = current.and_then(|h| self.arena.get(h).map(|n| (h, n))) {
            let go_left = value < node.value;
            parent = Some((handle, go_left, node.motion.position));
            current = if go_left { node.left } else { node.right };
        }

        let spawn = parent.map_or(self.spawn, |(_, _, at)| at);
        let handle = self.arena.insert(Self::leaf(value, spawn));
        self.revision += 1;

        match parent.and_then(|(p, go_left, _)| self.arena.get_mut(p).map(|n| (n, go_left))) {
            Some((node, true)) => node.left = Some(handle),
            Some((node, false)) => node.right = Some(handle),
            None => self.root = Some(handle),
        }
        tracing::debug!(value, len = self.len(), "BST insert");
        handle
    }

    fn leaf(value: i32, at: Point) -> TreeNode {
        TreeNode {
            value,
            left: None,
            right: None,
            motion: Motion::at_rest(at),
            visited: false,
        }
    }

    /// Left-root-right handle order, computed fresh on every call
    pub fn in_order(&self) -> Vec<NodeHandle> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.children(handle).0;
            }
            if let Some(handle) = stack.pop() {
                out.push(handle);
                current = self.children(handle).1;
            }
        }
        out
    }

    /// Values in ascending order
    pub fn values(&self) -> Vec<i32> {
        self.in_order()
            .into_iter()
            .filter_map(|h| self.arena.get(h).map(|n| n.value))
            .collect()
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root;
        while let Some(node) = current.and_then(|h| self.arena.get(h)) {
            if value == node.value {
                return true;
            }
            current = if value < node.value { node.left } else { node.right };
        }
        false
    }

    /// Number of levels; 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(NodeHandle, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((handle, depth)) = stack.pop() {
            best = best.max(depth);
            let (left, right) = self.children(handle);
            stack.extend(left.map(|l| (l, depth + 1)));
            stack.extend(right.map(|r| (r, depth + 1)));
        }
        best
    }

    /// Release the whole tree, children before their parent
    pub fn clear(&mut self) {
        let mut stack: Vec<(NodeHandle, bool)> =
            self.root.map(|r| (r, false)).into_iter().collect();
        while let Some((handle, expanded)) = stack.pop() {
            if expanded {
                self.arena.remove(handle);
                continue;
            }
            stack.push((handle, true));
            let (left, right) = self.children(handle);
            stack.extend(right.map(|r| (r, false)));
            stack.extend(left.map(|l| (l, false)));
        }
        debug_assert!(self.arena.is_empty());
        self.root = None;
        self.revision += 1;
        tracing::debug!("BST cleared");
    }

    /// Re-run the midpoint partition over `band`
    pub fn relayout(&mut self, layout: &TreeLayout, band: Band) {
        let plan = layout.plan(self.root, band, |h| self.children(h));
        for (handle, target) in plan {
            if let Some(node) = self.arena.get_mut(handle) {
                node.motion.retarget(target);
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

    /// Frame snapshot in in-order sequence with parent-to-child edges
    pub fn view(&self) -> FrameView {
        let mut frame = FrameView::new(StructureKind::Tree);
        let order = self.in_order();
        let index_of: HashMap<NodeHandle, usize> =
            order.iter().enumerate().map(|(i, h)| (*h, i)).collect();

        for handle in &order {
            let Some(node) = self.arena.get(*handle) else {
                continue;
            };
            let from = index_of[handle];
            let links = [(node.left, EdgeKind::LeftChild), (node.right, EdgeKind::RightChild)];
            for (child, kind) in links {
                if let Some(to) = child.and_then(|c| index_of.get(&c)) {
                    frame.edges.push(EdgeView { from, to: *to, kind });
                }
            }
            frame.elements.push(ElementView {
                key: ElementKey::Node(*handle),
                value: node.value,
                position: node.motion.position,
                highlighted: node.visited,
            });
        }
        frame
    }
}

impl Traversable for BstEngine {
    fn revision(&self) -> u64 {
        self.revision
    }

    fn traversal_order(&self) -> Vec<NodeHandle> {
        self.in_order()
    }

    fn set_visited(&mut self, handle: NodeHandle, visited: bool) {
        if let Some(node) = self.arena.get_mut(handle) {
            node.visited = visited;
        }
    }
}
