use thiserror::Error;

/// A result type for coordinate transformations
pub type Result<T> = std::result::Result<T, GeoError>;

/// An error when transforming or sampling coordinates
#[derive(Error, Debug)]
pub enum GeoError {
    /// When coordinates or raster do not have the expected shape
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
    /// When a bounding box is degenerated
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),
    /// When error during loading or saving
    #[error("Load IO error")]
    LoadIoError(#[from] std::io::Error),
    /// When configuration (de)serialization fails
    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),
}
