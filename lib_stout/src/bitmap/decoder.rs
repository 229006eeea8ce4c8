use std::fs;
use std::path::Path;

use image::DynamicImage;
use log::{debug, error, info};

use super::BitmapError;

/// Decodes any supported codec, sniffing the format from the data itself.
pub fn decode(encoded_data: &[u8]) -> Result<DynamicImage, BitmapError> {
    let image = image::load_from_memory(encoded_data).map_err(|e| {
        error!("Failed to decode image data: {}", e);
        BitmapError::from(e)
    })?;
    debug!(
        "Decoded {}x{} image ({:?})",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

pub fn read_file(path: &Path) -> Result<DynamicImage, BitmapError> {
    let data = fs::read(path).map_err(|e| {
        error!("Failed to read {}: {}", path.display(), e);
        BitmapError::from(e)
    })?;
    info!("Read {} bytes from {}", data.len(), path.display());
    decode(&data)
}
