use std::path::{Path, PathBuf};

use log::{error, info};
use thiserror::Error;

use crate::bitmap::{self, with_default_extension, BitmapError};
use crate::constants::APP_NAME;
use crate::grid::GridModel;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    #[error("No file is bound to this document")]
    NoFileBound,
}

/// Answer to the three-way "save unsaved changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    Cancelled,
}

impl Confirmation {
    pub fn proceeds(self) -> bool {
        self != Self::Cancelled
    }

    pub fn wants_save(self) -> bool {
        self == Self::Confirmed
    }
}

/// The grid model plus the file it was opened from or last saved to.
#[derive(Debug, Default)]
pub struct Document {
    pub model: GridModel,
    path: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            model: GridModel::new(),
            path: None,
        }
    }

    pub fn with_model(model: GridModel) -> Self {
        Self { model, path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.model.is_dirty()
    }

    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn title(&self) -> String {
        match (self.is_dirty(), self.file_name()) {
            (true, Some(name)) => format!("*{} - {}", name, APP_NAME),
            (true, None) => format!("*New - {}", APP_NAME),
            (false, Some(name)) => format!("{} - {}", name, APP_NAME),
            (false, None) => APP_NAME.to_owned(),
        }
    }

    /// Loads `path` into the model. Any failure leaves the document as it was.
    pub fn open(&mut self, path: &Path) -> Result<(), DocumentError> {
        let image = bitmap::read_file(path)?;
        self.model.load_from(&image)?;
        self.model.mark_saved();
        self.path = Some(path.to_path_buf());
        info!("Opened {}", path.display());
        Ok(())
    }

    /// Writes to the bound file.
    pub fn save(&mut self) -> Result<(), DocumentError> {
        let path = self.path.clone().ok_or(DocumentError::NoFileBound)?;
        self.write_to(&path)
    }

    /// Writes to `path` (gaining a `.bmp` extension if it has none) and binds it.
    /// Returns the path actually written.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf, DocumentError> {
        let path = with_default_extension(path);
        self.write_to(&path)?;
        self.path = Some(path.clone());
        Ok(path)
    }

    fn write_to(&mut self, path: &Path) -> Result<(), DocumentError> {
        bitmap::write_file(path, &self.model.export_bitmap()).map_err(|e| {
            error!("Save to {} failed: {}", path.display(), e);
            e
        })?;
        self.model.mark_saved();
        Ok(())
    }

    pub fn close(&mut self) {
        self.model.reset();
        self.path = None;
        info!("Document closed");
    }
}
