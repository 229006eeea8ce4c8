pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;

pub use decoder::{decode, read_file};
pub use encoder::{encode, write_file};
pub use error::BitmapError;
pub use format::{with_default_extension, ExportFormat};
