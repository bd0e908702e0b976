//! BSP tree node implementation.

use log::trace;

use crate::{Plane3D, PlaneSide, Polygon};

/// A node in the BSP tree.
///
/// Each node partitions space using a splitting plane and stores polygons
/// whose centroid lies on that plane. Polygons whose centroid is in front of
/// or behind the plane are stored in the respective child subtrees.
///
/// A node without a plane has never been built with any polygons and is
/// empty. Children are created lazily, only when a partition sends at least
/// one polygon to that side.
#[derive(Debug, Default)]
pub struct BspNode {
    /// The splitting plane, adopted from the first polygon this node is built with.
    plane: Option<Plane3D>,

    /// Polygons coplanar with the plane, in input order.
    polygons: Vec<Polygon>,

    /// Subtree containing polygons in FRONT of the splitting plane.
    front: Option<Box<BspNode>>,

    /// Subtree containing polygons BEHIND the splitting plane.
    back: Option<Box<BspNode>>,
}

/// Result of classifying a polygon list against one splitting plane.
struct Partition {
    coplanar: Vec<Polygon>,
    front: Vec<Polygon>,
    back: Vec<Polygon>,
}

impl BspNode {
    /// Creates an empty node with no plane, polygons or children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions `polygons` into this node and its subtrees.
    ///
    /// If the node has no plane yet, it adopts the plane of the first polygon.
    /// Every polygon is then classified by its centroid: on-plane polygons are
    /// appended to this node, the rest are passed on to the front or back child.
    ///
    /// Calling `build` again on a node keeps its plane and appends to the
    /// coplanar list. An empty input is a no-op.
    ///
    /// Pending subtrees are kept on an explicit work list, so the call stack
    /// does not grow with the depth of the tree.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut pending: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = pending.pop() {
            let Some(partition) = node.partition(polygons) else {
                continue;
            };

            let BspNode { front, back, .. } = node;
            if !partition.back.is_empty() {
                pending.push((back.get_or_insert_with(Box::default).as_mut(), partition.back));
            }
            if !partition.front.is_empty() {
                pending.push((front.get_or_insert_with(Box::default).as_mut(), partition.front));
            }
        }
    }

    /// Same as [`build`](Self::build), but builds the front and back subtrees
    /// in parallel once this node's partition is complete.
    ///
    /// Subtrees are spawned as scope tasks instead of nested joins, so deep
    /// trees do not deepen the worker stacks.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(&mut self, polygons: Vec<Polygon>) {
        rayon::scope(|scope| build_in_scope(scope, self, polygons));
    }

    /// Classifies `polygons` against this node's plane and stores the coplanar ones.
    ///
    /// Returns `None` for empty input. The coplanar append happens here, before
    /// any child is touched.
    fn partition(&mut self, polygons: Vec<Polygon>) -> Option<Partition> {
        let first = polygons.first()?;
        let plane = self.plane.get_or_insert_with(|| first.plane().clone());

        let mut partition = Partition {
            coplanar: Vec::new(),
            front: Vec::new(),
            back: Vec::new(),
        };

        for polygon in polygons {
            match polygon.side_of(plane) {
                PlaneSide::OnPlane => partition.coplanar.push(polygon),
                PlaneSide::Front => partition.front.push(polygon),
                PlaneSide::Back => partition.back.push(polygon),
            }
        }

        trace!(
            "partitioned: {} coplanar, {} front, {} back",
            partition.coplanar.len(),
            partition.front.len(),
            partition.back.len()
        );

        self.polygons.append(&mut partition.coplanar);
        Some(partition)
    }

    /// Copies plane and polygons, leaving out the children.
    fn clone_shallow(&self) -> Self {
        Self {
            plane: self.plane.clone(),
            polygons: self.polygons.clone(),
            front: None,
            back: None,
        }
    }

    /// Returns the splitting plane, or `None` if the node was never built.
    #[inline]
    pub fn plane(&self) -> Option<&Plane3D> {
        self.plane.as_ref()
    }

    /// Returns the polygons stored at this node.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Checks if this node has neither a plane nor polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plane.is_none() && self.polygons.is_empty()
    }

    /// Iterates over this subtree in pre-order: a node, then its front
    /// subtree, then its back subtree.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Returns the total number of polygons in this subtree (including all descendants).
    pub fn polygon_count(&self) -> usize {
        self.nodes().map(|node| node.polygons.len()).sum()
    }

    /// Returns the number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.front().map(|child| (child, level + 1)));
            pending.extend(node.back().map(|child| (child, level + 1)));
        }

        deepest
    }
}

#[cfg(feature = "parallel")]
fn build_in_scope<'s>(scope: &rayon::Scope<'s>, node: &'s mut BspNode, polygons: Vec<Polygon>) {
    let Some(partition) = node.partition(polygons) else {
        return;
    };

    let BspNode { front, back, .. } = node;
    if !partition.front.is_empty() {
        let child = front.get_or_insert_with(Box::default).as_mut();
        let polygons = partition.front;
        scope.spawn(move |scope| build_in_scope(scope, child, polygons));
    }
    if !partition.back.is_empty() {
        let child = back.get_or_insert_with(Box::default).as_mut();
        let polygons = partition.back;
        scope.spawn(move |scope| build_in_scope(scope, child, polygons));
    }
}

impl Clone for BspNode {
    fn clone(&self) -> Self {
        let mut root = self.clone_shallow();
        let mut pending: Vec<(&BspNode, &mut BspNode)> = vec![(self, &mut root)];

        while let Some((source, target)) = pending.pop() {
            let BspNode { front, back, .. } = target;
            if let Some(child) = source.front() {
                pending.push((child, front.insert(Box::new(child.clone_shallow())).as_mut()));
            }
            if let Some(child) = source.back() {
                pending.push((child, back.insert(Box::new(child.clone_shallow())).as_mut()));
            }
        }

        root
    }
}

impl PartialEq for BspNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.plane != b.plane || a.polygons != b.polygons {
                return false;
            }
            for pair in [(a.front(), b.front()), (a.back(), b.back())] {
                match pair {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Drop for BspNode {
    // Detach children one level at a time so dropping a long chain does not
    // recurse once per node.
    fn drop(&mut self) {
        let mut pending: Vec<Box<BspNode>> = Vec::new();
        pending.extend(self.front.take());
        pending.extend(self.back.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.front.take());
            pending.extend(node.back.take());
        }
    }
}

/// Pre-order iterator over the nodes of a subtree, see [`BspNode::nodes`].
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    stack: Vec<&'a BspNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a BspNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.back());
        self.stack.extend(node.front());
        Some(node)
    }
}

#[cfg(test)]
impl BspNode {
    /// Links `polygons` into a front-only chain, one polygon per node, each
    /// node taking its polygon's plane. Nothing is classified, so very long
    /// chains are cheap to set up.
    pub(crate) fn front_chain(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::new();
        let mut tail = &mut root;

        let count = polygons.len();
        for (i, polygon) in polygons.into_iter().enumerate() {
            tail.plane = Some(polygon.plane().clone());
            tail.polygons.push(polygon);
            if i + 1 < count {
                tail = tail.front.insert(Box::default()).as_mut();
            }
        }

        root
    }
}
