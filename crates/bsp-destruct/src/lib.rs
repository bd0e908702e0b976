//! BSP (Binary Space Partitioning) tree over convex planar polygons, with
//! radius-based destruction edits.

pub mod bsp;
mod destruction;
mod error;
mod plane;
mod polygon;

pub use bsp::{BspNode, BspTree, BspVisitor};
pub use destruction::{Explosion, apply_edit, partition_by_radius};
pub use error::{BspError, Result};
pub use plane::{PLANE_EPSILON, Plane3D, PlaneSide, normalize_or_zero};
pub use polygon::Polygon;
