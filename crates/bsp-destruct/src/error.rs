use thiserror::Error;

/// Error types for polygon construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BspError {
    #[error("Invalid geometry: polygon needs at least 3 vertices, got {vertex_count}")]
    InvalidGeometry { vertex_count: usize },
}

/// Result type for BSP operations
pub type Result<T> = std::result::Result<T, BspError>;
