//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of polygons during tree traversal
//! without coupling traversal logic to specific use cases.

use crate::Polygon;

/// Visitor for processing polygons during BSP tree traversal.
///
/// Traversal is depth-first: a node's own polygons, then its front subtree,
/// then its back subtree.
pub trait BspVisitor {
    /// Called once for each node that stores at least one polygon.
    ///
    /// The polygons passed to this method all belong to the same BSP node,
    /// in the order they were stored.
    fn visit(&mut self, polygons: &[Polygon]);
}

/// A simple visitor that collects all visited polygons.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Polygon>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collecting visitor with room for `capacity` polygons.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            collected: Vec::with_capacity(capacity),
        }
    }

    /// Returns the collected polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.collected
    }

    /// Returns a reference to the collected polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.collected
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, polygons: &[Polygon]) {
        self.collected.extend(polygons.iter().cloned());
    }
}

/// Counts polygons and the nodes that hold them, without cloning anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingVisitor {
    pub polygons: usize,
    pub groups: usize,
}

impl BspVisitor for CountingVisitor {
    fn visit(&mut self, polygons: &[Polygon]) {
        self.polygons += polygons.len();
        self.groups += 1;
    }
}

/// A visitor that calls a closure for each polygon group.
pub struct FnVisitor<F>
where
    F: FnMut(&[Polygon]),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&[Polygon]),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(&[Polygon]),
{
    fn visit(&mut self, polygons: &[Polygon]) {
        (self.func)(polygons);
    }
}
