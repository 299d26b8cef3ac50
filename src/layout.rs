//! Coordinate assignment for rendering a [`Tree`].
//!
//! The layout is a pure function of tree shape. The root sits at a fixed
//! canvas position; every level below it is one fixed vertical step down,
//! and children are offset horizontally by a half-spacing that halves
//! (integer division) per level, so sibling subtrees shrink geometrically
//! and never collide while the offset stays positive. Once the offset
//! collapses to zero (around depth `log2(half_spacing)`), nodes on the
//! same spine share an x coordinate; deep chains accept that.
//!
//! # Examples
//!
//! ```
//! use bstviz::layout::Position;
//! use bstviz::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(2);
//! let left = tree.insert(1);
//!
//! tree.calculate_positions();
//!
//! assert_eq!(tree.position(root), Some(Position::new(400, 50)));
//! assert_eq!(tree.position(left), Some(Position::new(200, 130)));
//! ```

use std::collections::HashMap;

use crate::tree::{NodeId, Tree};

/// A canvas coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal coordinate, growing rightward. Deep left spines can go
    /// negative; the canvas clips, the engine doesn't care.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Position {
    /// Creates a position from its coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Layout geometry.
///
/// The default geometry targets an 800x600 canvas: root centered near the
/// top, 80 pixels per level, children 200 pixels to either side of the
/// root.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Where the root node is placed.
    pub root: Position,
    /// Horizontal offset between the root and its children. Halved
    /// (integer division) at each level below.
    pub half_spacing: i32,
    /// Vertical step between levels.
    pub level_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root: Position::new(400, 50),
            half_spacing: 200,
            level_height: 80,
        }
    }
}

impl<T> Tree<T> {
    /// Recomputes the position of every reachable node with the default
    /// [`LayoutConfig`].
    ///
    /// The map is rebuilt wholesale: entries for deleted nodes disappear
    /// and the key set afterwards is exactly the reachable set. Calling
    /// this twice on an unchanged tree yields identical coordinates.
    pub fn calculate_positions(&mut self) {
        self.calculate_positions_with(&LayoutConfig::default());
    }

    /// Recomputes positions with explicit geometry.
    pub fn calculate_positions_with(&mut self, config: &LayoutConfig) {
        self.positions.clear();
        if let Some(root) = self.root() {
            self.assign(
                root,
                config.root.x,
                config.root.y,
                config.half_spacing,
                config.level_height,
            );
        }
    }

    fn assign(&mut self, id: NodeId, x: i32, y: i32, dx: i32, dy: i32) {
        self.positions.insert(id, Position::new(x, y));
        if let Some(left) = self.left(id) {
            self.assign(left, x - dx, y + dy, dx / 2, dy);
        }
        if let Some(right) = self.right(id) {
            self.assign(right, x + dx, y + dy, dx / 2, dy);
        }
    }

    /// The positions computed by the last `calculate_positions` call.
    ///
    /// Stale after any insert or delete until recomputed; consumers are
    /// expected to recompute before reading, the way a renderer lays out
    /// after every mutation.
    pub fn positions(&self) -> &HashMap<NodeId, Position> {
        &self.positions
    }

    /// The last computed position of `id`, if it was reachable when the
    /// layout ran.
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.positions.get(&id).copied()
    }
}
