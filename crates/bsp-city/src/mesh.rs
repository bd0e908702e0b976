//! Procedural cube and cube-grid geometry.

use bsp_destruct::{BspTree, Polygon, Result};
use nalgebra::{Point3, Vector3};

/// Vertex indices of the 6 cube faces, counter-clockwise when viewed from
/// outside so every face normal points away from the cube.
const FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7], // front (+Z)
    [1, 0, 3, 2], // back (-Z)
    [0, 4, 7, 3], // left (-X)
    [5, 1, 2, 6], // right (+X)
    [7, 6, 2, 3], // top (+Y)
    [0, 1, 5, 4], // bottom (-Y)
];

/// Generates the 6 face polygons of an axis-aligned cube.
pub fn make_cube(center: Point3<f64>, size: f64) -> Result<Vec<Polygon>> {
    let half = size / 2.0;

    let corners = [
        center + Vector3::new(-half, -half, -half), // 0: left-bottom-back
        center + Vector3::new(half, -half, -half),  // 1: right-bottom-back
        center + Vector3::new(half, half, -half),   // 2: right-top-back
        center + Vector3::new(-half, half, -half),  // 3: left-top-back
        center + Vector3::new(-half, -half, half),  // 4: left-bottom-front
        center + Vector3::new(half, -half, half),   // 5: right-bottom-front
        center + Vector3::new(half, half, half),    // 6: right-top-front
        center + Vector3::new(-half, half, half),   // 7: left-top-front
    ];

    FACES
        .iter()
        .map(|face| Polygon::new(face.iter().map(|&i| corners[i]).collect()))
        .collect()
}

/// Placement of a rectangular grid of equally sized cubes on the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityLayout {
    pub rows: usize,
    pub cols: usize,
    /// Distance between neighbouring cube centres.
    pub spacing: f64,
    /// Edge length of each cube.
    pub size: f64,
}

impl Default for CityLayout {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            spacing: 20.0,
            size: 10.0,
        }
    }
}

impl CityLayout {
    /// Centre of the cube in row `i`, column `j`.
    pub fn center(&self, i: usize, j: usize) -> Point3<f64> {
        Point3::new(i as f64 * self.spacing, 0.0, j as f64 * self.spacing)
    }

    /// All face polygons of the grid, row by row.
    pub fn polygons(&self) -> Result<Vec<Polygon>> {
        let mut polys = Vec::with_capacity(self.rows * self.cols * FACES.len());
        for i in 0..self.rows {
            for j in 0..self.cols {
                polys.extend(make_cube(self.center(i, j), self.size)?);
            }
        }
        Ok(polys)
    }
}

/// Builds one BSP tree holding every face of the city grid.
pub fn build_city(layout: &CityLayout) -> Result<BspTree> {
    Ok(BspTree::new(layout.polygons()?))
}
