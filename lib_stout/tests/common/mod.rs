#![allow(dead_code)]

use std::path::PathBuf;

use image::{DynamicImage, GrayImage, Luma};
use lib_stout::GridModel;

/// Cells painted by `sample_model`, kept away from the edges and the centre lines.
pub const SAMPLE_CELLS: [(i32, i32); 6] = [(0, 0), (3, 2), (10, 5), (95, 15), (60, 0), (0, 15)];

pub fn sample_model() -> GridModel {
    let mut model = GridModel::new();
    for &(x, y) in &SAMPLE_CELLS {
        model.paint(x, y);
    }
    model
}

pub fn is_blank(model: &GridModel) -> bool {
    model.grid().lit_count() == 0
}

pub fn gray_bitmap(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// A per-process path under the temp dir so parallel test runs don't collide.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lib_stout_{}_{}", std::process::id(), name))
}
