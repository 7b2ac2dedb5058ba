//! Errors

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the crate
///
/// Filling itself never fails; degenerate polygons produce an empty fill.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing an image failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Reading or decoding an image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Canvas with a zero width or height
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value
        width: usize,
        /// Height value
        height: usize,
    },

    /// Parallel coordinate arrays of different lengths
    #[error("Coordinate mismatch: {xs} x values, {ys} y values")]
    CoordinateMismatch {
        /// Number of x coordinates
        xs: usize,
        /// Number of y coordinates
        ys: usize,
    },
}
