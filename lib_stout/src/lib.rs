pub mod bitmap;
pub mod config;
pub mod constants;
pub mod document;
pub mod grid;
pub mod ruler;
pub mod view;

use log::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use crate::config::EditorConfig;
pub use crate::document::{Confirmation, Document, DocumentError};
pub use crate::grid::{Grid, GridModel, History};
pub use crate::view::{ViewTransform, ZoomDirection};

/// Sends library and editor logs to `path`, or to stderr if the file can't be created.
pub fn init_logging(path: &Path) {
    let mut builder = env_logger::Builder::new();

    match File::create(path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Can't create log file {}: {}", path.display(), e);
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder
        .filter(Some("lib_stout"), LevelFilter::Debug)
        .filter(Some("stout_pixilizer"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
