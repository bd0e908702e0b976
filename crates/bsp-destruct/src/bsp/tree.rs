//! BSP tree container and construction.

use log::debug;

use crate::Polygon;

use super::node::BspNode;
use super::visitor::{BspVisitor, CollectingVisitor};

/// A Binary Space Partitioning tree for 3D polygons.
///
/// The tree is built once from a polygon list and is read-only afterwards.
/// Edits never touch an existing tree; they build a new one from a new list
/// (see [`apply_edit`](crate::apply_edit)).
///
/// # Construction
///
/// Splitting planes are picked positionally: each node uses the plane of the
/// first polygon that reaches it. The shape of the tree therefore depends on
/// input order.
///
/// ```ignore
/// use bsp_destruct::{BspTree, Polygon};
///
/// let polygons: Vec<Polygon> = /* ... */;
/// let tree = BspTree::new(polygons);
/// ```
///
/// # Traversal
///
/// [`all_polygons`](Self::all_polygons) and [`visit`](Self::visit) walk the
/// tree depth-first: node polygons, then the front subtree, then the back
/// subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BspTree {
    root: BspNode,
}

impl BspTree {
    /// Builds a BSP tree from a collection of polygons.
    ///
    /// Every input polygon ends up in exactly one node. Returns an empty tree
    /// if the input is empty.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = BspNode::new();
        root.build(polygons);
        Self::finish(root)
    }

    /// Builds a BSP tree, constructing sibling subtrees in parallel.
    ///
    /// Produces the same tree as [`new`](Self::new).
    #[cfg(feature = "parallel")]
    pub fn new_parallel(polygons: Vec<Polygon>) -> Self {
        let mut root = BspNode::new();
        root.build_parallel(polygons);
        Self::finish(root)
    }

    fn finish(root: BspNode) -> Self {
        debug!(
            "built BSP tree: {} polygons, {} nodes, depth {}",
            root.polygon_count(),
            root.node_count(),
            root.depth()
        );
        Self { root }
    }

    /// Returns `true` if the tree contains no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &BspNode {
        &self.root
    }

    /// Returns the total number of polygons in the tree.
    pub fn polygon_count(&self) -> usize {
        self.root.polygon_count()
    }

    /// Returns the number of nodes in the tree (1 for an empty tree).
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns the maximum depth of the tree (0 for an empty tree).
    pub fn depth(&self) -> usize {
        if self.is_empty() { 0 } else { self.root.depth() }
    }

    /// Walks the tree depth-first, handing each node's polygons to `visitor`.
    ///
    /// Nodes without polygons are skipped.
    pub fn visit<V: BspVisitor>(&self, visitor: &mut V) {
        for node in self.root.nodes() {
            if !node.polygons().is_empty() {
                visitor.visit(node.polygons());
            }
        }
    }

    /// Collects all polygons in the tree into a vector.
    ///
    /// The order is deterministic: each node's polygons come before its front
    /// subtree, which comes before its back subtree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut visitor = CollectingVisitor::with_capacity(self.polygon_count());
        self.visit(&mut visitor);
        visitor.into_polygons()
    }
}

impl From<Vec<Polygon>> for BspTree {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}

impl FromIterator<Polygon> for BspTree {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
