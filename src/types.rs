//! Core data types for DSVis-RS
//!
//! This module contains the small value types shared by every part of the
//! visualizer: screen coordinates, the structure kinds, and the active mode
//! selector together with its help text.
//!
//! # Main Types
//!
//! - [`Point`] - A 2D coordinate in canvas space (origin at the canvas top-left)
//! - [`StructureKind`] - Which of the three structures an item belongs to
//! - [`Mode`] - The structure currently selected in the UI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D coordinate in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// Largest per-axis distance to another point
    pub fn max_axis_distance(self, other: Point) -> f32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Point> for egui::Pos2 {
    fn from(p: Point) -> Self {
        egui::pos2(p.x, p.y)
    }
}

/// The three structures the visualizer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    LinkedList,
    Tree,
    Array,
}

impl StructureKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StructureKind::LinkedList => "linked list",
            StructureKind::Tree => "binary search tree",
            StructureKind::Array => "array",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Active structure selector
///
/// Exactly one structure is on screen at a time. Each variant maps onto one
/// engine owned by the session; switching modes never touches engine data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    #[default]
    LinkedList,
    Bst,
    Array,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::LinkedList, Mode::Bst, Mode::Array];

    /// The structure this mode displays
    pub fn structure(&self) -> StructureKind {
        match self {
            Mode::LinkedList => StructureKind::LinkedList,
            Mode::Bst => StructureKind::Tree,
            Mode::Array => StructureKind::Array,
        }
    }

    /// Short label for mode buttons
    pub fn label(&self) -> &'static str {
        match self {
            Mode::LinkedList => "Linked List",
            Mode::Bst => "BST",
            Mode::Array => "Array",
        }
    }

    /// Status text shown when the mode is selected
    pub fn explanation(&self) -> &'static str {
        match self {
            Mode::LinkedList => {
                "Linked List Mode: Use Add Head/Tail/Remove Tail to modify list."
            }
            Mode::Bst => "Binary Search Tree Mode: Insert nodes and traverse in-order.",
            Mode::Array => "Array Mode: Add, Remove, Step, and Reset elements.",
        }
    }

    /// Pseudocode for the side panel
    pub fn pseudocode(&self) -> &'static str {
        match self {
            Mode::LinkedList => concat!(
                "insert_at_head(v):\n",
                "  node.next = head\n",
                "  head = node\n",
                "\n",
                "insert_at_tail(v):\n",
                "  walk to last node\n",
                "  last.next = node\n",
                "\n",
                "remove_tail():\n",
                "  walk to second-to-last\n",
                "  free last; next = none",
            ),
            Mode::Bst => concat!(
                "insert(root, v):\n",
                "  if root is none -> new node\n",
                "  if v < root.value -> left\n",
                "  else -> right\n",
                "\n",
                "in_order(node):\n",
                "  in_order(node.left)\n",
                "  visit(node)\n",
                "  in_order(node.right)",
            ),
            Mode::Array => concat!(
                "append(v):\n",
                "  if size == capacity -> full\n",
                "  values[size] = v; size += 1\n",
                "\n",
                "remove_last():\n",
                "  size -= 1\n",
                "\n",
                "step():\n",
                "  i = (i + 1) mod size",
            ),
        }
    }

    /// Next mode in toolbar order, wrapping around
    pub fn next(&self) -> Mode {
        match self {
            Mode::LinkedList => Mode::Bst,
            Mode::Bst => Mode::Array,
            Mode::Array => Mode::LinkedList,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
