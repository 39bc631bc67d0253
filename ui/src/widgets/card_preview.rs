//! Live preview of the card. Touches and primary-button drags on the preview
//! move and scale the QR code.

use bizcard_render::TouchPhase;
use egui::{Color32, ColorImage, Event, PointerButton, Pos2, Rect, Response, Sense, TextureHandle, TextureOptions, Ui};
use image::RgbaImage;

use crate::state::CardState;

/// Touch id used for mouse drags, so the mouse goes through the same
/// gesture code as a single finger.
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

pub fn to_color_image(canvas: &RgbaImage) -> ColorImage {
    let size = [canvas.width() as usize, canvas.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, canvas.as_raw())
}

/// Maps points on screen to canvas pixels.
#[derive(Debug, Clone, Copy)]
struct CanvasMapping {
    rect: Rect,
    width: u32,
    height: u32,
}

impl CanvasMapping {
    fn new(rect: Rect, pixels_per_point: f32) -> Self {
        // Backing store is the on-screen size times the whole device pixel ratio.
        let ratio = pixels_per_point.floor().max(1.0);
        Self {
            rect,
            width: (rect.width() * ratio).floor().max(1.0) as u32,
            height: (rect.height() * ratio).floor().max(1.0) as u32,
        }
    }

    fn to_canvas(self, pos: Pos2) -> (f32, f32) {
        let sx = self.width as f32 / self.rect.width().max(1.0);
        let sy = self.height as f32 / self.rect.height().max(1.0);
        ((pos.x - self.rect.min.x) * sx, (pos.y - self.rect.min.y) * sy)
    }
}

fn touch_phase(phase: egui::TouchPhase) -> TouchPhase {
    match phase {
        egui::TouchPhase::Start => TouchPhase::Start,
        egui::TouchPhase::Move => TouchPhase::Move,
        egui::TouchPhase::End => TouchPhase::End,
        egui::TouchPhase::Cancel => TouchPhase::Cancel,
    }
}

fn handle_touches(ui: &Ui, state: &mut CardState, mapping: CanvasMapping) {
    let touches: Vec<(u64, TouchPhase, Pos2)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::Touch { id, phase, pos, .. } => Some((id.0, touch_phase(*phase), *pos)),
                _ => None,
            })
            .collect()
    });

    for (id, phase, pos) in touches {
        let ours = match phase {
            TouchPhase::Start => mapping.rect.contains(pos),
            TouchPhase::Move | TouchPhase::End | TouchPhase::Cancel => state.is_tracking(id),
        };
        if ours {
            let (x, y) = mapping.to_canvas(pos);
            state.handle_touch(phase, id, x, y);
        }
    }
}

fn handle_mouse(ui: &Ui, response: &Response, state: &mut CardState, mapping: CanvasMapping) {
    let pos = response.interact_pointer_pos();
    let touching = ui.input(egui::InputState::any_touches);

    // A real touch ends the mouse drag, otherwise the two would pair up as a pinch.
    if state.is_tracking(MOUSE_TOUCH_ID) && (touching || response.drag_stopped_by(PointerButton::Primary)) {
        let (x, y) = pos.map_or((0.0, 0.0), |pos| mapping.to_canvas(pos));
        state.handle_touch(TouchPhase::End, MOUSE_TOUCH_ID, x, y);
    }
    if touching {
        return;
    }

    if let Some(pos) = pos {
        let (x, y) = mapping.to_canvas(pos);
        if response.drag_started_by(PointerButton::Primary) {
            state.handle_touch(TouchPhase::Start, MOUSE_TOUCH_ID, x, y);
        } else if response.dragged_by(PointerButton::Primary) && state.is_tracking(MOUSE_TOUCH_ID) {
            state.handle_touch(TouchPhase::Move, MOUSE_TOUCH_ID, x, y);
        }
    }
}

/// Fill the remaining space with the card, redrawing it when the state or
/// the size changed.
pub fn card_preview(ui: &mut Ui, state: &mut CardState, texture: &mut Option<TextureHandle>) -> Response {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());
    let mapping = CanvasMapping::new(rect, ui.ctx().pixels_per_point());

    handle_mouse(ui, &response, state, mapping);
    handle_touches(ui, state, mapping);

    if let Some(canvas) = state.refresh(mapping.width, mapping.height) {
        let image = to_color_image(canvas);
        match texture {
            Some(handle) => handle.set(image, TextureOptions::LINEAR),
            None => *texture = Some(ui.ctx().load_texture("card_preview", image, TextureOptions::LINEAR)),
        }
    }

    if let Some(handle) = texture.as_ref() {
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        ui.painter().image(handle.id(), rect, uv, Color32::WHITE);
    }

    let label = format!("Card preview {}x{}", mapping.width, mapping.height);
    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Image, true, &label));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_scales_by_whole_pixel_ratio() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(200.0, 300.0));
        let mapping = CanvasMapping::new(rect, 2.5);
        assert_eq!((mapping.width, mapping.height), (400, 600));
        assert_eq!(mapping.to_canvas(Pos2::new(150.0, 50.0)), (100.0, 0.0));

        let low = CanvasMapping::new(rect, 0.75);
        assert_eq!((low.width, low.height), (200, 300));
    }

    #[test]
    fn test_color_image_keeps_size() {
        let canvas = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
        let image = to_color_image(&canvas);
        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels[0], Color32::from_rgb(1, 2, 3));
    }
}
