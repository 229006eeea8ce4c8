use eframe::egui::{self, Key, Modifiers};
use eframe::Frame;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use log::{debug, error, info};

use lib_stout::bitmap::BitmapError;
use lib_stout::ruler::is_ruler_cell;
use lib_stout::{Document, DocumentError, EditorConfig, GridModel, ViewTransform};

use crate::filemanager::{self, ImageHandlingError};
use crate::viewport::{canvas_pos, update_canvas_viewport, ViewportOptions};

const OUTLINE_WIDTH: f32 = 1.0;

pub struct PixelEditor {
    document: Document,
    view: ViewTransform,
    viewport_options: ViewportOptions,
    canvas_rect: Option<Rect>,
    shown_title: String,
}

impl PixelEditor {
    pub fn new(config: EditorConfig) -> Self {
        let document = Document::with_model(GridModel::with_dimensions(config.cols, config.rows));
        Self {
            view: ViewTransform::new(&config),
            viewport_options: ViewportOptions::new(),
            canvas_rect: None,
            shown_title: document.title(),
            document,
        }
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    fn report(&self, context: &str, err: ImageHandlingError) {
        match err {
            ImageHandlingError::DialogCanceled => debug!("{}: dialog canceled", context),
            ImageHandlingError::Document(DocumentError::Bitmap(
                BitmapError::DimensionMismatch { expected, .. },
            )) => {
                error!("{}: {}", context, err);
                filemanager::show_error(
                    "Error",
                    &format!("The file must be {}x{} pixels", expected.0, expected.1),
                );
            }
            err => {
                error!("{}: {}", context, err);
                filemanager::show_error("Error", &format!("{}: {}", context, err));
            }
        }
    }

    /// Saves to the bound file, asking for a path first if there is none.
    /// Returns true when the grid reached disk.
    fn save(&mut self) -> bool {
        let result = if self.document.path().is_some() {
            self.document.save().map_err(ImageHandlingError::from)
        } else {
            filemanager::pick_save_path().and_then(|path| {
                self.document
                    .save_as(&path)
                    .map(|_| ())
                    .map_err(ImageHandlingError::from)
            })
        };

        match result {
            Ok(()) => {
                filemanager::show_info("Saved", "Image saved successfully!");
                true
            }
            Err(e) => {
                self.report("Failed to save file", e);
                false
            }
        }
    }

    /// Runs the unsaved-changes prompt. Returns whether the caller may discard the grid.
    fn resolve_unsaved(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }

        let answer = filemanager::confirm_unsaved();
        if answer.wants_save() {
            return self.save();
        }
        answer.proceeds()
    }

    fn open(&mut self) {
        if !self.resolve_unsaved() {
            return;
        }

        let result = filemanager::pick_open_path().and_then(|path| {
            self.document
                .open(&path)
                .map_err(ImageHandlingError::from)
        });
        if let Err(e) = result {
            self.report("Failed to open file", e);
        }
    }

    fn close(&mut self) {
        if self.resolve_unsaved() {
            self.document.close();
        }
    }

    fn center(&mut self) {
        if let Some(rect) = self.canvas_rect {
            self.view.fit_to_canvas(rect.width(), rect.height());
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z)) {
            self.document.model.undo();
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Y)) {
            self.document.model.redo();
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::S)) {
            self.save();
        }
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("💾").on_hover_text("Save").clicked() {
                    self.save();
                }
                if ui.button("📂").on_hover_text("Open").clicked() {
                    self.open();
                }
                if ui.button("🗑").on_hover_text("Clear").clicked() {
                    self.document.model.clear();
                }
                if ui.button("✖").on_hover_text("Close").clicked() {
                    self.close();
                }
                if ui.button("⛶").on_hover_text("Center").clicked() {
                    self.center();
                }
                if ui
                    .selectable_label(self.viewport_options.show_ruler, "📏")
                    .on_hover_text("Toggle Ruler")
                    .clicked()
                {
                    self.viewport_options.show_ruler = !self.viewport_options.show_ruler;
                }
            });
        });
    }

    fn draw_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
                let canvas_rect = response.rect;
                self.canvas_rect = Some(canvas_rect);

                let input = ui.input(|i| i.clone());
                update_canvas_viewport(&input, &mut self.view, canvas_rect);

                // Paint on press and while moving, the same events a held button produces.
                let pointer = &input.pointer;
                if pointer.any_pressed() || pointer.is_moving() {
                    if let Some((x, y)) = canvas_pos(canvas_rect, pointer.hover_pos()) {
                        let (cell_x, cell_y) = self.view.screen_to_cell(x, y);
                        if pointer.primary_down() {
                            self.document.model.paint(cell_x, cell_y);
                        } else if pointer.secondary_down() {
                            self.document.model.erase(cell_x, cell_y);
                        }
                    }
                }

                self.draw_cells(&ui.painter_at(canvas_rect), canvas_rect.min);
            });
    }

    fn draw_cells(&self, painter: &egui::Painter, origin: Pos2) {
        let grid = self.document.model.grid();
        let (cols, rows) = grid.dimensions();
        let extent = self.view.cell_extent();

        for (x, y, lit) in grid.iter() {
            let (sx, sy) = self.view.cell_to_screen(x, y);
            let cell_rect = Rect::from_min_size(origin + Vec2::new(sx, sy), Vec2::splat(extent));

            let fill = if lit { Color32::WHITE } else { Color32::BLACK };
            let outline = if self.viewport_options.show_ruler && is_ruler_cell(x, y, cols, rows) {
                Color32::RED
            } else {
                Color32::WHITE
            };

            painter.rect(cell_rect, 0.0, fill, Stroke::new(OUTLINE_WIDTH, outline));
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.document.title();
        if title != self.shown_title {
            info!("Window title: {}", title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}

impl eframe::App for PixelEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_shortcuts(ctx);
        self.draw_toolbar(ctx);
        self.draw_central_panel(ctx);
        self.sync_title(ctx);
    }
}
