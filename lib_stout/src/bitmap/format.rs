use std::path::{Path, PathBuf};

use image::ImageFormat;

use super::BitmapError;
use crate::constants::DEFAULT_EXTENSION;

/// Codecs a grid can be saved through, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Bmp,
    Png,
    Jpeg,
    Gif,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Bmp, Self::Png, Self::Jpeg, Self::Gif];

    pub fn from_extension(ext: &str) -> Result<Self, BitmapError> {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Ok(Self::Bmp),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            _ => Err(BitmapError::UnsupportedExtension(ext.to_owned())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, BitmapError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| BitmapError::UnsupportedExtension(String::new()))?;
        Self::from_extension(ext)
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Bmp => ImageFormat::Bmp,
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Gif => ImageFormat::Gif,
        }
    }

    /// Human readable name for file dialog filters.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bmp => "Bitmap Image",
            Self::Png => "PNG Image",
            Self::Jpeg => "JPEG Image",
            Self::Gif => "GIF Image",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Bmp => &["bmp"],
            Self::Png => &["png"],
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Gif => &["gif"],
        }
    }
}

/// Appends `.bmp` to a path that has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
