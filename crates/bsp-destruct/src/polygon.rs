//! Generic polygon representation for BSP trees.

use nalgebra::{Point3, Vector3};

use crate::error::{BspError, Result};
use crate::{Plane3D, PlaneSide};

/// A convex polygon in 3D space, defined by an ordered list of vertices.
///
/// The loop is closed implicitly; the first vertex is not repeated at the end.
/// The supporting plane is derived once from the first three vertices, so the
/// normal follows their winding order. Later vertices are trusted to lie on
/// that plane and are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3<f64>>,
    plane: Plane3D,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// # Errors
    /// Returns [`BspError::InvalidGeometry`] if fewer than 3 vertices are provided.
    /// Collinear leading vertices are accepted and give a degenerate plane.
    pub fn new(vertices: Vec<Point3<f64>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(BspError::InvalidGeometry {
                vertex_count: vertices.len(),
            });
        }
        let plane = Plane3D::from_three_points(vertices[0], vertices[1], vertices[2]);
        Ok(Self { vertices, plane })
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a polygon holds at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the plane that this polygon lies on.
    #[inline]
    pub fn plane(&self) -> &Plane3D {
        &self.plane
    }

    /// Computes the centroid of the polygon as the unweighted mean of its vertices.
    pub fn centroid(&self) -> Point3<f64> {
        let sum: Vector3<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Classifies this polygon relative to a plane by its centroid alone.
    ///
    /// Polygons straddling the plane are not split; they land wholly on the
    /// side their centroid falls on.
    #[inline]
    pub fn side_of(&self, plane: &Plane3D) -> PlaneSide {
        plane.classify_point(self.centroid())
    }

    /// Euclidean distance from the centroid to `point`.
    #[inline]
    pub fn distance_to(&self, point: Point3<f64>) -> f64 {
        nalgebra::distance(&self.centroid(), &point)
    }
}

impl TryFrom<Vec<Point3<f64>>> for Polygon {
    type Error = BspError;

    fn try_from(vertices: Vec<Point3<f64>>) -> Result<Self> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad_z(z: f64) -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(2.0, 0.0, z),
            Point3::new(2.0, 2.0, z),
            Point3::new(0.0, 2.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn fewer_than_three_vertices_is_invalid() {
        let err = Polygon::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, BspError::InvalidGeometry { vertex_count: 2 });

        let err = Polygon::new(vec![]).unwrap_err();
        assert_eq!(err, BspError::InvalidGeometry { vertex_count: 0 });
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn try_from_vertices() {
        let poly = Polygon::try_from(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        assert!(poly.is_ok());

        let poly = Polygon::try_from(vec![Point3::new(0.0, 0.0, 0.0)]);
        assert!(matches!(poly, Err(BspError::InvalidGeometry { vertex_count: 1 })));
    }

    #[test]
    fn plane_comes_from_first_three_vertices() {
        let poly = quad_z(3.0);
        assert_eq!(poly.plane().normal(), Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(poly.plane().offset(), 3.0);
        assert_eq!(poly.len(), 4);
        assert!(!poly.is_empty());
    }

    #[test]
    fn later_vertices_are_not_checked_for_coplanarity() {
        let poly = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 5.0),
        ])
        .unwrap();
        assert_eq!(poly.plane().normal(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let poly = quad_z(-1.0);
        assert_eq!(poly.centroid(), Point3::new(1.0, 1.0, -1.0));

        // Uneven vertex distribution pulls the centroid; it is not the area centre.
        let skewed = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ])
        .unwrap();
        assert_eq!(skewed.centroid(), Point3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn side_of_uses_centroid() {
        let plane = Plane3D::from_point_and_normal(Point3::origin(), Vector3::z());

        assert_eq!(quad_z(1.0).side_of(&plane), PlaneSide::Front);
        assert_eq!(quad_z(-1.0).side_of(&plane), PlaneSide::Back);
        assert_eq!(quad_z(0.0).side_of(&plane), PlaneSide::OnPlane);

        // Straddles z = 0 but the centroid sits in front.
        let straddling = Polygon::new(vec![
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
        ])
        .unwrap();
        assert_eq!(straddling.side_of(&plane), PlaneSide::Front);
    }

    #[test]
    fn distance_to_point() {
        let poly = quad_z(0.0);
        assert_relative_eq!(poly.distance_to(Point3::new(1.0, 1.0, 4.0)), 4.0);
        assert_relative_eq!(poly.distance_to(Point3::new(4.0, 5.0, 0.0)), 5.0);
    }
}
