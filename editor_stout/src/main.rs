mod app;
mod filemanager;
mod viewport;

use app::PixelEditor;
use eframe::egui;
use lib_stout::constants::APP_NAME;
use lib_stout::EditorConfig;

fn main() -> Result<(), eframe::Error> {
    let config = EditorConfig::new();
    lib_stout::init_logging(&config.log_file);

    let app = PixelEditor::new(config.clone());
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(app.title()),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
