mod common;

use std::path::Path;

use common::{gray_bitmap, is_blank, sample_model, SAMPLE_CELLS};
use image::DynamicImage;
use lib_stout::bitmap::{decode, encode, with_default_extension, BitmapError, ExportFormat};
use lib_stout::GridModel;

#[test]
fn test_export_is_monochrome() {
    let model = sample_model();
    let bitmap = model.export_bitmap();

    assert_eq!(bitmap.dimensions(), (96, 16));
    assert!(bitmap.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    assert_eq!(bitmap.pixels().filter(|p| p.0[0] == 255).count(), SAMPLE_CELLS.len());
    assert_eq!(bitmap.get_pixel(10, 5).0[0], 255);
    assert_eq!(bitmap.get_pixel(11, 5).0[0], 0);
}

#[test]
fn test_export_then_load_reproduces_grid() {
    let model = sample_model();
    let bitmap = DynamicImage::ImageLuma8(model.export_bitmap());

    let mut loaded = GridModel::new();
    loaded.load_from(&bitmap).unwrap();
    assert_eq!(loaded.grid(), model.grid());
}

#[test]
fn test_lossless_codecs_round_trip() {
    let model = sample_model();

    for format in [ExportFormat::Bmp, ExportFormat::Png, ExportFormat::Gif] {
        let encoded = encode(&model.export_bitmap(), format).unwrap();
        assert!(!encoded.is_empty());

        let decoded = decode(&encoded).unwrap();
        let mut loaded = GridModel::new();
        loaded.load_from(&decoded).unwrap();
        assert_eq!(loaded.grid(), model.grid(), "{:?} round trip", format);
    }
}

#[test]
fn test_jpeg_keeps_dimensions() {
    let encoded = encode(&sample_model().export_bitmap(), ExportFormat::Jpeg).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (96, 16));
}

#[test]
fn test_load_rejects_wrong_dimensions() {
    let mut model = sample_model();
    let before = model.grid().clone();
    let history_len = model.history().len();

    let result = model.load_from(&gray_bitmap(10, 10, 255));
    match result {
        Err(BitmapError::DimensionMismatch { expected, found }) => {
            assert_eq!(expected, (96, 16));
            assert_eq!(found, (10, 10));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }

    assert_eq!(model.grid(), &before);
    assert_eq!(model.history().len(), history_len);
}

#[test]
fn test_load_restarts_history() {
    let mut model = sample_model();
    model.load_from(&gray_bitmap(96, 16, 0)).unwrap();

    assert!(is_blank(&model));
    assert_eq!(model.history().len(), 1);
    assert_eq!(model.history().index(), Some(0));
    assert!(!model.undo());
}

#[test]
fn test_load_thresholds_luma() {
    let mut model = GridModel::new();

    model.load_from(&gray_bitmap(96, 16, 128)).unwrap();
    assert_eq!(model.grid().lit_count(), 96 * 16);

    model.load_from(&gray_bitmap(96, 16, 127)).unwrap();
    assert!(is_blank(&model));
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(matches!(
        decode(b"definitely not an image"),
        Err(BitmapError::Image(_))
    ));
}

#[test]
fn test_format_from_path() {
    assert_eq!(ExportFormat::from_path(Path::new("a.bmp")).unwrap(), ExportFormat::Bmp);
    assert_eq!(ExportFormat::from_path(Path::new("a.PNG")).unwrap(), ExportFormat::Png);
    assert_eq!(ExportFormat::from_path(Path::new("a.jpeg")).unwrap(), ExportFormat::Jpeg);
    assert_eq!(ExportFormat::from_path(Path::new("a.jpg")).unwrap(), ExportFormat::Jpeg);
    assert_eq!(ExportFormat::from_path(Path::new("a.gif")).unwrap(), ExportFormat::Gif);

    assert!(matches!(
        ExportFormat::from_path(Path::new("a.tiff")),
        Err(BitmapError::UnsupportedExtension(ext)) if ext == "tiff"
    ));
    assert!(ExportFormat::from_path(Path::new("noext")).is_err());
}

#[test]
fn test_default_extension() {
    assert_eq!(with_default_extension(Path::new("sign")), Path::new("sign.bmp"));
    assert_eq!(with_default_extension(Path::new("sign.png")), Path::new("sign.png"));
}
