use log::debug;

use crate::config::EditorConfig;
use crate::constants::{MAX_SCALE, MIN_SCALE, SCALE_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// One discrete step per wheel event; a zero delta is no zoom at all.
    pub fn from_scroll(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Maps between screen points and grid cells under a pan offset and scale.
///
/// Screen points are relative to the canvas origin. `offset` is applied before
/// scaling: `screen = offset + cell * cell_size * scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    cell_size: f32,
    cols: u32,
    rows: u32,
    scale: f32,
    offset: (f32, f32),
    pan_anchor: Option<(f32, f32)>,
}

impl ViewTransform {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            cols: config.cols,
            rows: config.rows,
            scale: config.initial_scale.clamp(MIN_SCALE, MAX_SCALE),
            offset: (0.0, 0.0),
            pan_anchor: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// On-screen edge length of one cell.
    pub fn cell_extent(&self) -> f32 {
        self.cell_size * self.scale
    }

    pub fn grid_screen_size(&self) -> (f32, f32) {
        let extent = self.cell_extent();
        (self.cols as f32 * extent, self.rows as f32 * extent)
    }

    /// The result may lie outside the grid; callers range-check before editing.
    pub fn screen_to_cell(&self, px: f32, py: f32) -> (i32, i32) {
        let extent = self.cell_extent();
        (
            ((px - self.offset.0) / extent).floor() as i32,
            ((py - self.offset.1) / extent).floor() as i32,
        )
    }

    /// Top-left screen corner of cell (x, y).
    pub fn cell_to_screen(&self, x: u32, y: u32) -> (f32, f32) {
        let extent = self.cell_extent();
        (
            self.offset.0 + x as f32 * extent,
            self.offset.1 + y as f32 * extent,
        )
    }

    /// Steps the scale by half a unit, keeping the grid point under (px, py) in place.
    pub fn zoom_at(&mut self, px: f32, py: f32, direction: ZoomDirection) {
        let old_scale = self.scale;
        let new_scale = match direction {
            ZoomDirection::In => old_scale + SCALE_STEP,
            ZoomDirection::Out => old_scale - SCALE_STEP,
        }
        .clamp(MIN_SCALE, MAX_SCALE);

        if new_scale == old_scale {
            return;
        }

        let ratio = new_scale / old_scale;
        self.offset = (
            px - (px - self.offset.0) * ratio,
            py - (py - self.offset.1) * ratio,
        );
        self.scale = new_scale;
        debug!("Zoom {:?} to {} at ({}, {})", direction, self.scale, px, py);
    }

    pub fn begin_pan(&mut self, px: f32, py: f32) {
        self.pan_anchor = Some((px - self.offset.0, py - self.offset.1));
    }

    /// Places the grid so the point grabbed in `begin_pan` sits under (px, py).
    pub fn pan_to(&mut self, px: f32, py: f32) {
        if let Some((ax, ay)) = self.pan_anchor {
            self.offset = (px - ax, py - ay);
        }
    }

    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Scales the grid to fill the canvas along its tighter axis and centres it.
    pub fn fit_to_canvas(&mut self, canvas_width: f32, canvas_height: f32) {
        let grid_width = self.cols as f32 * self.cell_size;
        let grid_height = self.rows as f32 * self.cell_size;
        if grid_width <= 0.0 || grid_height <= 0.0 {
            return;
        }

        self.scale = (canvas_width / grid_width)
            .min(canvas_height / grid_height)
            .clamp(MIN_SCALE, MAX_SCALE);
        self.offset = (
            (canvas_width - grid_width * self.scale) / 2.0,
            (canvas_height - grid_height * self.scale) / 2.0,
        );
        debug!(
            "Fit {}x{} canvas: scale {}, offset {:?}",
            canvas_width, canvas_height, self.scale, self.offset
        );
    }
}
