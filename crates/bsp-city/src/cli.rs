//! Command-line interface for the explosion demo.

use bsp_destruct::{BspTree, Explosion};
use clap::Parser;
use log::info;
use nalgebra::Point3;

use crate::mesh::{CityLayout, build_city};

#[derive(Parser, Debug)]
#[command(name = "bsp-city")]
#[command(about = "Builds a grid of cubes into a BSP tree and blows a hole in it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of cube rows (along X)
    #[arg(long, default_value_t = 3, env = "BSP_CITY_ROWS")]
    pub rows: usize,

    /// Number of cube columns (along Z)
    #[arg(long, default_value_t = 3, env = "BSP_CITY_COLS")]
    pub cols: usize,

    /// Distance between neighbouring cube centres
    #[arg(long, default_value_t = 20.0, env = "BSP_CITY_SPACING")]
    pub spacing: f64,

    /// Cube edge length
    #[arg(long, default_value_t = 10.0, env = "BSP_CITY_SIZE")]
    pub size: f64,

    /// Explosion centre, X coordinate
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true, env = "BSP_CITY_BLAST_X")]
    pub blast_x: f64,

    /// Explosion centre, Y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, env = "BSP_CITY_BLAST_Y")]
    pub blast_y: f64,

    /// Explosion centre, Z coordinate
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true, env = "BSP_CITY_BLAST_Z")]
    pub blast_z: f64,

    /// Explosion radius; polygons whose centroid is this close or closer are removed
    #[arg(long, default_value_t = 12.0, env = "BSP_CITY_RADIUS")]
    pub radius: f64,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn layout(&self) -> CityLayout {
        CityLayout {
            rows: self.rows,
            cols: self.cols,
            spacing: self.spacing,
            size: self.size,
        }
    }

    pub fn explosion(&self) -> Explosion {
        Explosion::new(
            Point3::new(self.blast_x, self.blast_y, self.blast_z),
            self.radius,
        )
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Polygon counts before and after the explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub initial: usize,
    pub remaining: usize,
}

/// Builds the city, applies the explosion and returns both trees' polygon counts.
pub fn run(cli: &Cli) -> bsp_destruct::Result<Report> {
    let layout = cli.layout();
    let city: BspTree = build_city(&layout)?;
    let initial = city.all_polygons().len();
    info!(
        "built {}x{} city: {} polygons, depth {}",
        layout.rows,
        layout.cols,
        initial,
        city.depth()
    );

    let city = cli.explosion().apply(&city);
    let remaining = city.all_polygons().len();
    info!("explosion removed {} polygons", initial - remaining);

    Ok(Report { initial, remaining })
}
