//! Binary Space Partitioning tree for 2D polygon management.
//!
//! This module provides a BSP tree implementation that recursively
//! partitions the plane using split lines derived from input polygons. The
//! tree enables:
//!
//! - Deterministic traversal of the partitioned polygon set
//! - Inspection of how splitting fragmented the input
//!
//! # Example
//!
//! ```ignore
//! use bsp2d::{BspTree, CollectingVisitor, Polygon};
//!
//! // Build a tree from polygons
//! let polygons: Vec<Polygon> = /* create polygons */;
//! let tree = BspTree::from_polygons(polygons)?;
//!
//! // Walk every node, front subtrees first
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse(&mut visitor);
//!
//! let stored_polygons = visitor.into_polygons();
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Nodes storing a splitter polygon and front/back subtrees
//! - [`SplitterSelector`]: Strategy trait for choosing splitter polygons
//! - [`BspVisitor`]: Visitor trait for custom traversal behavior

mod node;
mod selector;
mod tree;
mod visitor;

// Re-export main types
pub use node::BspNode;
pub use selector::{FirstPolygon, SplitterSelector};
pub use tree::{BspTree, BuildOptions};
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor, NodeRole};
