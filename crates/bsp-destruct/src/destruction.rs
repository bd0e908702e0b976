//! Radius-based destruction edits.
//!
//! An edit never modifies a tree in place. It walks the tree in
//! [`BspTree::all_polygons`] order, drops every polygon whose centroid is not
//! strictly farther than the radius, and builds a fresh tree from the
//! survivors. The survivors keep the old traversal order, so the new tree's
//! splitting planes follow from that order.

use log::debug;
use nalgebra::Point3;

use crate::bsp::FnVisitor;
use crate::{BspTree, Polygon};

/// A spherical blast that removes every polygon whose centroid it reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    /// Point the blast is centred on.
    pub center: Point3<f64>,
    /// Reach of the blast; centroids at this distance or closer are removed.
    pub radius: f64,
}

impl Explosion {
    /// Creates a blast at `center` reaching `radius`. No validation is done.
    pub fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns `true` if the polygon survives the blast.
    ///
    /// Only a centroid strictly farther than `radius` survives, so any NaN in
    /// the distance or the radius means the polygon is removed.
    #[inline]
    pub fn spares(&self, polygon: &Polygon) -> bool {
        polygon.distance_to(self.center) > self.radius
    }

    /// Returns `true` if the polygon is removed by the blast.
    ///
    /// The boundary is inclusive: a centroid at exactly `radius` is affected.
    #[inline]
    pub fn affects(&self, polygon: &Polygon) -> bool {
        !self.spares(polygon)
    }

    /// Builds a new tree without the polygons this explosion reaches.
    pub fn apply(&self, tree: &BspTree) -> BspTree {
        apply_edit(tree, self.center, self.radius)
    }
}

/// Splits `polygons` into `(kept, removed)` around `point`.
///
/// A polygon is kept when its centroid is strictly farther than `radius`
/// from `point`. Both lists preserve input order and together hold every
/// input polygon exactly once.
pub fn partition_by_radius(
    polygons: Vec<Polygon>,
    point: Point3<f64>,
    radius: f64,
) -> (Vec<Polygon>, Vec<Polygon>) {
    let blast = Explosion::new(point, radius);
    polygons.into_iter().partition(|p| blast.spares(p))
}

/// Returns a new tree holding only the polygons of `tree` whose centroid is
/// farther than `radius` from `point`.
pub fn apply_edit(tree: &BspTree, point: Point3<f64>, radius: f64) -> BspTree {
    let blast = Explosion::new(point, radius);
    let mut kept = Vec::new();
    let mut removed = 0usize;

    // Removed polygons are only counted, never cloned.
    tree.visit(&mut FnVisitor::new(|polygons: &[Polygon]| {
        for polygon in polygons {
            if blast.spares(polygon) {
                kept.push(polygon.clone());
            } else {
                removed += 1;
            }
        }
    }));

    debug!(
        "edit at ({}, {}, {}) radius {}: removed {}, kept {}",
        point.x,
        point.y,
        point.z,
        radius,
        removed,
        kept.len()
    );
    BspTree::new(kept)
}
