use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GrayImage};
use log::{debug, error, info};

use super::{BitmapError, ExportFormat};

pub fn encode(bitmap: &GrayImage, format: ExportFormat) -> Result<Vec<u8>, BitmapError> {
    // The GIF codec only takes RGB(A) input.
    let image = match format {
        ExportFormat::Gif => {
            DynamicImage::ImageRgba8(DynamicImage::ImageLuma8(bitmap.clone()).to_rgba8())
        }
        _ => DynamicImage::ImageLuma8(bitmap.clone()),
    };

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format.image_format())
        .map_err(|e| {
            error!("Failed to encode {:?}: {}", format, e);
            BitmapError::from(e)
        })?;

    let encoded_data = buffer.into_inner();
    debug!(
        "Encoded {}x{} bitmap as {:?} ({} bytes)",
        bitmap.width(),
        bitmap.height(),
        format,
        encoded_data.len()
    );
    Ok(encoded_data)
}

/// Encodes with the codec matching the path's extension and writes the file.
pub fn write_file(path: &Path, bitmap: &GrayImage) -> Result<(), BitmapError> {
    let format = ExportFormat::from_path(path)?;
    let encoded_data = encode(bitmap, format)?;
    fs::write(path, &encoded_data).map_err(|e| {
        error!("Failed to write {}: {}", path.display(), e);
        BitmapError::from(e)
    })?;
    info!("File saved successfully to {}", path.display());
    Ok(())
}
