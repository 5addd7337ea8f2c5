use std::collections::VecDeque;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EditorResult;

/// Default per-channel color distance from the seed color still
/// considered fillable
pub const DEFAULT_TOLERANCE: u8 = 50;

/// Default number of pixels painted per [`FillJob::advance`] call
pub const DEFAULT_PIXELS_PER_STEP: usize = 450;

// A seed already within this distance of the fill color on every channel
// makes the job a no-op, preventing redundant refills of the same region.
const SEED_MATCH_TOLERANCE: u8 = 9;

/// One in-flight animated flood fill.
///
/// The fill is a breadth-first expansion from the seed pixel, so the
/// painted region grows outward as a roughly concentric wavefront. The
/// whole BFS state lives in this value; [`advance`](Self::advance) resumes
/// it for one bounded chunk of work, which is what keeps a large fill
/// interruptible and presentable frame by frame instead of blocking the
/// session.
///
/// Similarity is always measured against the color sampled at the seed,
/// never against a neighbor's own neighbor, so the tolerance cannot drift
/// across the region and bleed through weak edges one hop at a time.
pub struct FillJob {
    // FIFO frontier of flat pixel indices (y * width + x)
    frontier: VecDeque<u32>,
    // One byte per pixel, doubles as the enqueue guard
    visited: Vec<u8>,
    start_color: Color,
    fill_color: Color,
    tolerance: u8,
    pixels_per_step: usize,
    width: u32,
    height: u32,
    pixels_painted: usize,
    done: bool,
}

impl FillJob {
    /// Start a fill at the given seed pixel. Rejects an out-of-buffer
    /// seed before any mutation; completes immediately (nothing enqueued)
    /// when the seed pixel already matches the fill color.
    pub fn start(
        buffer: &PixelBuffer,
        x: i32,
        y: i32,
        fill_color: Color,
        tolerance: u8,
        pixels_per_step: usize,
    ) -> EditorResult<Self> {
        let start_color = buffer.get(x, y)?;
        let width = buffer.width();
        let height = buffer.height();

        let mut job = Self {
            frontier: VecDeque::new(),
            visited: vec![0; width as usize * height as usize],
            start_color,
            fill_color,
            tolerance,
            pixels_per_step: pixels_per_step.max(1),
            width,
            height,
            pixels_painted: 0,
            done: false,
        };

        if start_color.within_tolerance(fill_color, SEED_MATCH_TOLERANCE) {
            job.done = true;
            return Ok(job);
        }

        let seed = y as u32 * width + x as u32;
        job.visited[seed as usize] = 1;
        job.frontier.push_back(seed);
        Ok(job)
    }

    /// Start a fill with the default tolerance and chunk size
    pub fn start_default(
        buffer: &PixelBuffer,
        x: i32,
        y: i32,
        fill_color: Color,
    ) -> EditorResult<Self> {
        Self::start(
            buffer,
            x,
            y,
            fill_color,
            DEFAULT_TOLERANCE,
            DEFAULT_PIXELS_PER_STEP,
        )
    }

    /// Perform up to `pixels_per_step` dequeue-paint-expand steps.
    /// Returns true once the frontier is empty and the job is complete.
    pub fn advance(&mut self, buffer: &mut PixelBuffer) -> bool {
        if self.done {
            return true;
        }

        for _ in 0..self.pixels_per_step {
            let Some(index) = self.frontier.pop_front() else {
                break;
            };
            buffer.paint(index as usize, self.fill_color);
            self.pixels_painted += 1;

            let x = index % self.width;
            let y = index / self.width;
            // Fixed neighbor order (+x, -x, +y, -y) for determinism
            if x + 1 < self.width {
                self.consider(buffer, index + 1);
            }
            if x > 0 {
                self.consider(buffer, index - 1);
            }
            if y + 1 < self.height {
                self.consider(buffer, index + self.width);
            }
            if y > 0 {
                self.consider(buffer, index - self.width);
            }
        }

        if self.frontier.is_empty() {
            self.done = true;
        }
        self.done
    }

    fn consider(&mut self, buffer: &PixelBuffer, index: u32) {
        if self.visited[index as usize] != 0 {
            return;
        }
        if buffer
            .color_at(index as usize)
            .within_tolerance(self.start_color, self.tolerance)
        {
            self.visited[index as usize] = 1;
            self.frontier.push_back(index);
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of pixels painted so far. Every pixel is visited at most
    /// once, so this never exceeds `width * height`.
    pub fn pixels_painted(&self) -> usize {
        self.pixels_painted
    }
}
