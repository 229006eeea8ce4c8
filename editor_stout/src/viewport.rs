use eframe::egui::{InputState, PointerButton, Pos2, Rect};
use lib_stout::{ViewTransform, ZoomDirection};

#[derive(Default)]
pub struct ViewportOptions {
    pub show_ruler: bool,
}

impl ViewportOptions {
    pub fn new() -> Self {
        Self { show_ruler: false }
    }
}

/// Pointer position relative to the canvas origin, if it is over the canvas.
pub fn canvas_pos(canvas_rect: Rect, pos: Option<Pos2>) -> Option<(f32, f32)> {
    let pos = pos.filter(|pos| canvas_rect.contains(*pos))?;
    let local = pos - canvas_rect.min;
    Some((local.x, local.y))
}

pub fn update_zoom(input: &InputState, view: &mut ViewTransform, canvas_rect: Rect) {
    let Some(direction) = ZoomDirection::from_scroll(input.raw_scroll_delta.y) else {
        return;
    };

    if let Some((x, y)) = canvas_pos(canvas_rect, input.pointer.hover_pos()) {
        view.zoom_at(x, y, direction);
    }
}

pub fn update_pan_offset(input: &InputState, view: &mut ViewTransform, canvas_rect: Rect) {
    if input.pointer.button_pressed(PointerButton::Middle) {
        if let Some((x, y)) = canvas_pos(canvas_rect, input.pointer.interact_pos()) {
            view.begin_pan(x, y);
        }
    }

    if !input.pointer.middle_down() {
        view.end_pan();
        return;
    }

    // Dragging may leave the canvas, so don't filter by its bounds here.
    if let Some(pos) = input.pointer.hover_pos() {
        let local = pos - canvas_rect.min;
        view.pan_to(local.x, local.y);
    }
}

pub fn update_canvas_viewport(input: &InputState, view: &mut ViewTransform, canvas_rect: Rect) {
    update_zoom(input, view, canvas_rect);
    update_pan_offset(input, view, canvas_rect);
}
