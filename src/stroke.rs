use crate::buffer::PixelBuffer;
use crate::color::Color;

/// Paints one in-progress brush stroke straight into the pixel buffer.
///
/// Each pointer sample extends the stroke by a line segment from the last
/// recorded point, stamped with round caps and joins so consecutive short
/// segments read as one smooth stroke rather than a faceted polyline.
/// Drawing is synchronous, stroke feedback has to be instantaneous.
pub struct StrokeRenderer {
    last_point: Option<(f32, f32)>,
    color: Color,
    width: u32,
}

impl StrokeRenderer {
    pub fn new(color: Color, width: u32) -> Self {
        Self {
            last_point: None,
            color,
            width: width.max(1),
        }
    }

    pub fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    /// Record the path origin and stamp a dot there, so a click without
    /// any movement still leaves a mark.
    pub fn begin(&mut self, buffer: &mut PixelBuffer, x: f32, y: f32) {
        self.last_point = Some((x, y));
        stamp(buffer, x.round() as i32, y.round() as i32, self.color, self.width);
    }

    /// Draw a segment from the last recorded point to the new point
    pub fn extend_to(&mut self, buffer: &mut PixelBuffer, x: f32, y: f32) {
        let Some((lx, ly)) = self.last_point else {
            return;
        };
        draw_segment(buffer, lx, ly, x, y, self.color, self.width);
        self.last_point = Some((x, y));
    }

    /// Finalize the stroke; no further segments are drawn
    pub fn finish(&mut self) {
        self.last_point = None;
    }
}

// Bresenham walk between the rounded endpoints, stamping a round brush
// tip at every step. The per-step stamps give round caps and joins for
// free, and the walk guarantees a gap-free path even at width 1.
fn draw_segment(buffer: &mut PixelBuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Color, width: u32) {
    let (mut x, mut y) = (x0.round() as i32, y0.round() as i32);
    let (x1, y1) = (x1.round() as i32, y1.round() as i32);

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(buffer, x, y, color, width);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

// Filled disc of the brush diameter, clipped at the buffer edges
fn stamp(buffer: &mut PixelBuffer, cx: i32, cy: i32, color: Color, width: u32) {
    if width <= 1 {
        buffer.set_clipped(cx, cy, color);
        return;
    }
    let radius = width as f32 / 2.0;
    let r = radius.ceil() as i32;
    let r2 = radius * radius;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f32 <= r2 {
                buffer.set_clipped(cx + dx, cy + dy, color);
            }
        }
    }
}
