use std::path::PathBuf;

use lib_stout::bitmap::ExportFormat;
use lib_stout::{Confirmation, DocumentError};
use log::debug;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageHandlingError {
    #[error("File dialog was canceled")]
    DialogCanceled,

    #[error(transparent)]
    Document(#[from] DocumentError),
}

fn image_dialog() -> FileDialog {
    ExportFormat::ALL
        .iter()
        .fold(FileDialog::new(), |dialog, format| {
            dialog.add_filter(format.label(), format.extensions())
        })
}

pub fn pick_open_path() -> Result<PathBuf, ImageHandlingError> {
    image_dialog()
        .pick_file()
        .ok_or(ImageHandlingError::DialogCanceled)
}

pub fn pick_save_path() -> Result<PathBuf, ImageHandlingError> {
    image_dialog()
        .set_file_name("untitled.bmp")
        .save_file()
        .ok_or(ImageHandlingError::DialogCanceled)
}

pub fn confirm_unsaved() -> Confirmation {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Save changes?")
        .set_description("You have unsaved changes. Do you want to save them?")
        .set_buttons(MessageButtons::YesNoCancel)
        .show();
    debug!("Unsaved changes prompt answered with {:?}", result);

    match result {
        MessageDialogResult::Yes | MessageDialogResult::Ok => Confirmation::Confirmed,
        MessageDialogResult::No => Confirmation::Declined,
        _ => Confirmation::Cancelled,
    }
}

pub fn show_info(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_error(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
