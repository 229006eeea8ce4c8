mod common;

use std::fs;

use common::{gray_bitmap, is_blank, sample_model, temp_path};
use image::ImageFormat;
use lib_stout::bitmap::BitmapError;
use lib_stout::{Confirmation, Document, DocumentError};

#[test]
fn test_title_tracks_file_and_dirty_state() {
    let mut document = Document::new();
    assert_eq!(document.title(), "Stout Pixilizer");

    document.model.paint(0, 0);
    assert_eq!(document.title(), "*New - Stout Pixilizer");

    let path = document.save_as(&temp_path("title.png")).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(document.title(), format!("{} - Stout Pixilizer", name));

    document.model.paint(1, 0);
    assert_eq!(document.title(), format!("*{} - Stout Pixilizer", name));

    fs::remove_file(path).ok();
}

#[test]
fn test_save_as_then_open() {
    let mut document = Document::with_model(sample_model());
    let path = document.save_as(&temp_path("roundtrip")).unwrap();

    assert_eq!(path.extension().unwrap(), "bmp");
    assert_eq!(document.path(), Some(path.as_path()));
    assert!(!document.is_dirty());

    let mut reopened = Document::new();
    reopened.open(&path).unwrap();
    assert_eq!(reopened.model.grid(), document.model.grid());
    assert_eq!(reopened.path(), Some(path.as_path()));
    assert!(!reopened.is_dirty());
    assert_eq!(reopened.model.history().len(), 1);

    fs::remove_file(path).ok();
}

#[test]
fn test_save_writes_bound_file() {
    let mut document = Document::new();
    assert!(matches!(document.save(), Err(DocumentError::NoFileBound)));

    let path = document.save_as(&temp_path("bound.png")).unwrap();
    document.model.paint(5, 5);
    document.save().unwrap();
    assert!(!document.is_dirty());

    let mut reopened = Document::new();
    reopened.open(&path).unwrap();
    assert_eq!(reopened.model.cell(5, 5), Some(true));

    fs::remove_file(path).ok();
}

#[test]
fn test_failed_save_keeps_dirty_flag() {
    let mut document = Document::with_model(sample_model());
    let path = temp_path("missing_dir").join("out.bmp");

    assert!(document.save_as(&path).is_err());
    assert!(document.is_dirty());
    assert_eq!(document.path(), None);
}

#[test]
fn test_open_wrong_size_leaves_document_unchanged() {
    let path = temp_path("small.png");
    gray_bitmap(10, 10, 255)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();

    let mut document = Document::with_model(sample_model());
    let before = document.model.grid().clone();

    let result = document.open(&path);
    assert!(matches!(
        result,
        Err(DocumentError::Bitmap(BitmapError::DimensionMismatch { .. }))
    ));
    assert_eq!(document.model.grid(), &before);
    assert_eq!(document.path(), None);
    assert!(document.is_dirty());

    fs::remove_file(path).ok();
}

#[test]
fn test_open_missing_file_is_io_error() {
    let mut document = Document::new();
    let result = document.open(&temp_path("does_not_exist.bmp"));
    assert!(matches!(
        result,
        Err(DocumentError::Bitmap(BitmapError::Io(_)))
    ));
    assert!(is_blank(&document.model));
}

#[test]
fn test_close_resets_everything() {
    let mut document = Document::with_model(sample_model());
    let path = document.save_as(&temp_path("close.gif")).unwrap();
    document.model.paint(7, 7);

    document.close();
    assert!(is_blank(&document.model));
    assert_eq!(document.path(), None);
    assert!(!document.is_dirty());
    assert_eq!(document.title(), "Stout Pixilizer");

    fs::remove_file(path).ok();
}

#[test]
fn test_confirmation_outcomes() {
    assert!(Confirmation::Confirmed.proceeds());
    assert!(Confirmation::Confirmed.wants_save());

    assert!(Confirmation::Declined.proceeds());
    assert!(!Confirmation::Declined.wants_save());

    assert!(!Confirmation::Cancelled.proceeds());
    assert!(!Confirmation::Cancelled.wants_save());
}
