use image::{DynamicImage, GrayImage, Luma};
use log::{debug, info, warn};

use super::{Grid, History};
use crate::bitmap::BitmapError;
use crate::constants::{COLS, LIT_THRESHOLD, ROWS};

const LIT: Luma<u8> = Luma([255]);
const UNLIT: Luma<u8> = Luma([0]);

/// The editable grid together with its undo history and dirty flag.
#[derive(Debug)]
pub struct GridModel {
    grid: Grid,
    history: History,
    dirty: bool,
}

impl GridModel {
    /// A blank 96x16 model.
    pub fn new() -> Self {
        Self::with_dimensions(COLS, ROWS)
    }

    pub fn with_dimensions(cols: u32, rows: u32) -> Self {
        let mut model = Self {
            grid: Grid::new(cols, rows),
            history: History::new(),
            dirty: false,
        };
        model.seed_history();
        model
    }

    // The blank grid is entry 0 so the first edit can be undone.
    fn seed_history(&mut self) {
        self.history.reset();
        self.history.push(self.grid.clone());
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<bool> {
        self.grid.get(x, y)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Sets one cell and records the result. Out-of-range coordinates are ignored
    /// and leave the history untouched.
    pub fn set_cell(&mut self, x: i32, y: i32, value: bool) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        self.grid.set(x as u32, y as u32, value);
        self.commit();
        true
    }

    pub fn paint(&mut self, x: i32, y: i32) -> bool {
        self.set_cell(x, y, true)
    }

    pub fn erase(&mut self, x: i32, y: i32) -> bool {
        self.set_cell(x, y, false)
    }

    /// Snapshots the current grid as the newest history entry.
    pub fn commit(&mut self) {
        self.history.push(self.grid.clone());
        self.dirty = true;
        debug!(
            "Committed snapshot {:?} of {}",
            self.history.index(),
            self.history.len()
        );
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.grid.clone_from(snapshot);
                debug!("Undo to snapshot {:?}", self.history.index());
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.grid.clone_from(snapshot);
                debug!("Redo to snapshot {:?}", self.history.index());
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.grid.fill(false);
        self.commit();
    }

    /// Blank grid, fresh history, clean. Used when the document is closed.
    pub fn reset(&mut self) {
        self.grid.fill(false);
        self.seed_history();
        self.dirty = false;
    }

    /// Replaces the grid with `bitmap` and restarts the history from it.
    ///
    /// The bitmap must match the grid dimensions exactly; on mismatch nothing
    /// changes. Pixels are read as 8-bit luma, lit at or above the threshold.
    pub fn load_from(&mut self, bitmap: &DynamicImage) -> Result<(), BitmapError> {
        let found = (bitmap.width(), bitmap.height());
        let expected = self.grid.dimensions();
        if found != expected {
            warn!(
                "Rejected {}x{} bitmap for a {}x{} grid",
                found.0, found.1, expected.0, expected.1
            );
            return Err(BitmapError::DimensionMismatch { expected, found });
        }

        let luma = bitmap.to_luma8();
        for (x, y, pixel) in luma.enumerate_pixels() {
            self.grid.set(x, y, pixel.0[0] >= LIT_THRESHOLD);
        }

        self.history.reset();
        self.commit();
        info!("Loaded bitmap with {} lit cells", self.grid.lit_count());
        Ok(())
    }

    /// Renders the grid as a grayscale image holding only 0 and 255.
    pub fn export_bitmap(&self) -> GrayImage {
        let (width, height) = self.grid.dimensions();
        let mut bitmap = GrayImage::new(width, height);
        for (x, y, lit) in self.grid.iter() {
            bitmap.put_pixel(x, y, if lit { LIT } else { UNLIT });
        }
        bitmap
    }
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new()
    }
}
