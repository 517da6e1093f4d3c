//! Read-only frame snapshot for the renderer.
//!
//! Engines describe themselves as a flat list of elements plus the edges
//! between them. The renderer only ever sees this, never the engines.

use crate::arena::NodeHandle;
use crate::types::{Point, StructureKind};

/// Identity of one drawn element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    /// A list or tree node
    Node(NodeHandle),
    /// An array index
    Slot(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementView {
    pub key: ElementKey,
    pub value: i32,
    /// Current (animated) position
    pub position: Point,
    /// Visited by the running traversal, or the current array index
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Next,
    LeftChild,
    RightChild,
}

/// Link between two entries of [`FrameView::elements`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView {
    pub from: usize,
    pub to: usize,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub kind: StructureKind,
    pub elements: Vec<ElementView>,
    pub edges: Vec<EdgeView>,
}

impl FrameView {
    pub fn new(kind: StructureKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Values in element order
    pub fn values(&self) -> Vec<i32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &ElementView> + '_ {
        self.elements.iter().filter(|e| e.highlighted)
    }

    /// Endpoints of each edge as positions
    pub fn edge_positions(&self) -> impl Iterator<Item = (Point, Point, EdgeKind)> + '_ {
        self.edges.iter().filter_map(|edge| {
            let from = self.elements.get(edge.from)?;
            let to = self.elements.get(edge.to)?;
            Some((from.position, to.position, edge.kind))
        })
    }
}
