use std::path::PathBuf;

use crate::constants::{CELL_SIZE, COLS, INITIAL_SCALE, LOG_FILE, ROWS, WINDOW_SIZE};

/// Startup settings for the editor. Built once in `main` and handed to the app.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub cols: u32,
    pub rows: u32,
    pub cell_size: f32,
    pub initial_scale: f32,
    pub window_size: (f32, f32),
    pub log_file: PathBuf,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,
            cell_size: CELL_SIZE,
            initial_scale: INITIAL_SCALE,
            window_size: WINDOW_SIZE,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
