use std::io;

use image::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitmapError {
    #[error("image must be {}x{} pixels, got {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] ImageError),

    #[error("Unsupported file extension: {0:?}")]
    UnsupportedExtension(String),
}
