pub const APP_NAME: &str = "Stout Pixilizer";

// Display geometry
pub const COLS: u32 = 96;
pub const ROWS: u32 = 16;

/// Screen pixels per cell at scale 1.0
pub const CELL_SIZE: f32 = 10.0;

pub const INITIAL_SCALE: f32 = 1.5;
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 5.0;
pub const SCALE_STEP: f32 = 0.5;

pub const WINDOW_SIZE: (f32, f32) = (1920.0, 480.0);

// Files
pub const DEFAULT_EXTENSION: &str = "bmp";
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["bmp", "png", "jpg", "jpeg", "gif"];
pub const LOG_FILE: &str = "log.txt";

/// Luma at or above this value reads back as a lit cell.
pub const LIT_THRESHOLD: u8 = 128;
