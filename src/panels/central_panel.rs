use egui::{Color32, Rect, TextureHandle, TextureOptions, pos2};

use crate::coords::CoordinateMapper;
use crate::input::{CanvasPointer, collect_pointer_events, route_pointer_events};
use crate::session::EditorSession;

/// The central canvas: presents the pixel buffer as a texture and feeds
/// pointer input back into the session.
pub struct CanvasPanel {
    texture: Option<TextureHandle>,
    texture_version: u64,
}

impl CanvasPanel {
    pub fn new() -> Self {
        Self {
            texture: None,
            texture_version: 0,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, session: &mut EditorSession) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let buffer_w = session.buffer().width();
            let buffer_h = session.buffer().height();
            let rect = display_rect(available, buffer_w, buffer_h);

            let response = ui.allocate_rect(rect, egui::Sense::drag());
            let mapper = CoordinateMapper::new(rect, buffer_w, buffer_h);
            let pointer = CanvasPointer::from_response(&response);
            route_pointer_events(session, &collect_pointer_events(pointer, &mapper));

            // Upload after input handling so this frame's strokes are
            // already visible.
            self.sync_texture(ui.ctx(), session);
            if let Some(texture) = &self.texture {
                ui.painter().image(
                    texture.id(),
                    rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        });
    }

    fn sync_texture(&mut self, ctx: &egui::Context, session: &EditorSession) {
        let buffer = session.buffer();
        if self.texture.is_some() && self.texture_version == buffer.version() {
            return;
        }
        let image = buffer.as_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::LINEAR)),
        }
        self.texture_version = buffer.version();
    }
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self::new()
    }
}

// Largest rect with the buffer's aspect ratio that fits the panel,
// centered. The mapper undoes exactly this scaling.
fn display_rect(available: Rect, buffer_w: u32, buffer_h: u32) -> Rect {
    let scale = (available.width() / buffer_w as f32)
        .min(available.height() / buffer_h as f32)
        .max(f32::EPSILON);
    let size = egui::vec2(buffer_w as f32 * scale, buffer_h as f32 * scale);
    Rect::from_center_size(available.center(), size)
}
