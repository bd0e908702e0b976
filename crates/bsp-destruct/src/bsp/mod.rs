//! Binary Space Partitioning tree for 3D polygon storage.
//!
//! This module provides a BSP tree that recursively partitions 3D space using
//! planes taken from the input polygons. Polygons are classified by their
//! centroid only and are never split, so the tree holds exactly the polygons
//! it was built from.
//!
//! # Example
//!
//! ```ignore
//! use bsp_destruct::{BspTree, Polygon};
//! use bsp_destruct::bsp::CountingVisitor;
//!
//! // Build a tree from polygons
//! let polygons: Vec<Polygon> = /* create polygons */;
//! let tree = BspTree::new(polygons);
//!
//! // Flatten it again, depth-first
//! let all = tree.all_polygons();
//!
//! // Or walk it with a visitor
//! let mut counter = CountingVisitor::default();
//! tree.visit(&mut counter);
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The immutable container holding the root node
//! - [`BspNode`]: Nodes storing a splitting plane and coplanar polygons
//! - [`BspVisitor`]: Visitor trait for custom traversal behavior

mod node;
mod tree;
mod visitor;

// Re-export main types
pub use node::{BspNode, Nodes};
pub use tree::BspTree;
pub use visitor::{BspVisitor, CollectingVisitor, CountingVisitor, FnVisitor};
