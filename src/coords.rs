use egui::{Pos2, Rect};

/// Maps pointer positions from display space into buffer space.
///
/// The canvas is presented inside an arbitrarily scaled screen rectangle
/// (responsive layouts, high-DPI, mobile viewports), so a pointer position
/// has to be corrected by the ratio of backing resolution to displayed
/// size. Without this correction drawing diverges from the pointer
/// progressively as the scale ratio departs from 1.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    display_rect: Rect,
    buffer_width: u32,
    buffer_height: u32,
}

impl CoordinateMapper {
    pub fn new(display_rect: Rect, buffer_width: u32, buffer_height: u32) -> Self {
        Self {
            display_rect,
            buffer_width,
            buffer_height,
        }
    }

    /// Whether a pointer position is over the displayed canvas
    pub fn contains(&self, pointer: Pos2) -> bool {
        self.display_rect.contains(pointer)
    }

    /// Convert a pointer position (display pixels) to buffer coordinates
    /// (backing-store pixels). Identity when the displayed size equals
    /// the buffer size.
    pub fn to_buffer(&self, pointer: Pos2) -> (f32, f32) {
        let scale_x = self.buffer_width as f32 / self.display_rect.width();
        let scale_y = self.buffer_height as f32 / self.display_rect.height();
        (
            (pointer.x - self.display_rect.left()) * scale_x,
            (pointer.y - self.display_rect.top()) * scale_y,
        )
    }
}
