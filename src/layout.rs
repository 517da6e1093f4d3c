//! Target positions from structural role.
//!
//! Layout is a pure function of the current structure plus the geometry in
//! this module. It only ever produces *targets*; moving the drawn position is
//! left to [`crate::animation`].
//!
//! - **List**: row-major grid that wraps after `max_per_row` nodes
//! - **Tree**: recursive midpoint partition of a horizontal band
//! - **Array**: one fixed slot per index, single row

use serde::{Deserialize, Serialize};

use crate::arena::NodeHandle;
use crate::types::Point;

/// Geometry of the linked list grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListLayout {
    pub node_width: f32,
    pub node_height: f32,
    /// Horizontal distance between node origins
    pub spacing: f32,
    /// Vertical gap between rows, on top of `node_height`
    pub row_gap: f32,
    pub max_per_row: usize,
    pub margin_x: f32,
    pub margin_y: f32,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            node_width: 100.0,
            node_height: 50.0,
            spacing: 150.0,
            row_gap: 100.0,
            max_per_row: 6,
            margin_x: 50.0,
            margin_y: 80.0,
        }
    }
}

impl ListLayout {
    pub fn row_height(&self) -> f32 {
        self.node_height + self.row_gap
    }

    /// Top-left corner of the node at sequence index `index`
    pub fn target(&self, index: usize) -> Point {
        let per_row = self.max_per_row.max(1);
        let row = index / per_row;
        let col = index % per_row;
        Point::new(
            col as f32 * self.spacing + self.margin_x,
            row as f32 * self.row_height() + self.margin_y,
        )
    }

    /// Targets for a list of `count` nodes, head first
    pub fn plan(&self, count: usize) -> Vec<Point> {
        (0..count).map(|i| self.target(i)).collect()
    }
}

/// Horizontal extent a subtree may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x_min: f32,
    pub x_max: f32,
}

impl Band {
    pub const fn new(x_min: f32, x_max: f32) -> Self {
        Self { x_min, x_max }
    }

    pub fn mid(&self) -> f32 {
        (self.x_min + self.x_max) * 0.5
    }

    pub fn left_half(&self) -> Band {
        Band::new(self.x_min, self.mid())
    }

    pub fn right_half(&self) -> Band {
        Band::new(self.mid(), self.x_max)
    }
}

/// Geometry of the tree drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeLayout {
    pub node_radius: f32,
    /// Y of the root's center
    pub top: f32,
    /// Vertical distance between depths
    pub level_step: f32,
    /// Space kept free on both sides of the canvas
    pub band_margin: f32,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            node_radius: 25.0,
            top: 60.0,
            level_step: 80.0,
            band_margin: 40.0,
        }
    }
}

impl TreeLayout {
    /// Band covering a canvas of the given width
    pub fn band_for_width(&self, width: f32) -> Band {
        let x_max = (width - self.band_margin).max(self.band_margin);
        Band::new(self.band_margin, x_max)
    }

    /// Where a node at `depth` inside `band` is centered
    pub fn target(&self, band: Band, depth: usize) -> Point {
        Point::new(band.mid(), self.top + depth as f32 * self.level_step)
    }

    /// Compute a center for every node reachable from `root`.
    ///
    /// `children` reports the (left, right) links of a node. Each node is
    /// centered in its band and hands the left and right halves to its
    /// children, so sibling subtrees never overlap horizontally. Runs with an
    /// explicit stack so degenerate (list-shaped) trees cannot overflow.
    pub fn plan<F>(
        &self,
        root: Option<NodeHandle>,
        band: Band,
        children: F,
    ) -> Vec<(NodeHandle, Point)>
    where
        F: Fn(NodeHandle) -> (Option<NodeHandle>, Option<NodeHandle>),
    {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeHandle, Band, usize)> =
            root.map(|h| (h, band, 0)).into_iter().collect();

        while let Some((handle, band, depth)) = stack.pop() {
            out.push((handle, self.target(band, depth)));
            let (left, right) = children(handle);
            if let Some(r) = right {
                stack.push((r, band.right_half(), depth + 1));
            }
            if let Some(l) = left {
                stack.push((l, band.left_half(), depth + 1));
            }
        }
        out
    }
}

/// Geometry of the array row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayLayout {
    pub start_x: f32,
    pub y: f32,
    pub box_width: f32,
    pub box_height: f32,
    pub gap: f32,
}

impl Default for ArrayLayout {
    fn default() -> Self {
        Self {
            start_x: 50.0,
            y: 80.0,
            box_width: 60.0,
            box_height: 60.0,
            gap: 10.0,
        }
    }
}

impl ArrayLayout {
    /// Top-left corner of slot `index`
    pub fn slot(&self, index: usize) -> Point {
        Point::new(
            self.start_x + index as f32 * (self.box_width + self.gap),
            self.y,
        )
    }

    /// Where a freshly appended element is first drawn
    pub fn entry(&self, index: usize) -> Point {
        self.slot(index).offset(0.0, -self.box_height)
    }
}

/// All layout geometry, as stored in the config file
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub list: ListLayout,
    pub tree: TreeLayout,
    pub array: ArrayLayout,
}
