//! Cube-city geometry and the explosion demo built on `bsp-destruct`.

pub mod cli;
pub mod mesh;

pub use mesh::{CityLayout, build_city, make_cube};
