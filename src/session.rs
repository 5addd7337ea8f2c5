use image::DynamicImage;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EditorResult;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::fill::FillJob;
use crate::scheduler::{RenderScheduler, SchedulerStatus};
use crate::stroke::StrokeRenderer;
use crate::tool::{Tool, ToolState};

/// One interactive editing session over a single pixel buffer.
///
/// This is the owner of the data flow: pointer events arrive here already
/// mapped to buffer coordinates, get gated by the tool state machine, and
/// either mutate the buffer immediately (brush) or spawn a fill job that
/// the render scheduler drains frame by frame.
///
/// Everything runs on one logical thread; the `Filling` phase is what
/// guarantees a single buffer mutator at a time.
pub struct EditorSession {
    buffer: PixelBuffer,
    tools: ToolState,
    scheduler: RenderScheduler,
    active_stroke: Option<StrokeRenderer>,
    bus: EventBus,
    // Background decode can be pending while the session is otherwise
    // idle; buffer mutation waits for it to settle.
    decode_pending: bool,
}

impl EditorSession {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_tools(width, height, ToolState::default())
    }

    /// Create a session with restored tool settings
    pub fn with_tools(width: u32, height: u32, tools: ToolState) -> Self {
        Self {
            buffer: PixelBuffer::new(width.max(1), height.max(1)),
            tools,
            scheduler: RenderScheduler::new(),
            active_stroke: None,
            bus: EventBus::new(),
            decode_pending: false,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn is_filling(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Register a side-effect collaborator, e.g. audio feedback
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.bus.subscribe(handler);
    }

    /// Switch tools. Switching mid-stroke finalizes the current stroke
    /// first, no further segments are drawn with the old settings.
    pub fn select_tool(&mut self, tool: Tool) {
        self.finish_stroke();
        let old = self.tools.tool();
        if old != tool {
            self.tools.select_tool(tool);
            self.bus.emit(EditorEvent::ToolChanged { old, new: tool });
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.set_color(color);
    }

    /// Parse and apply a hex color string; malformed input is rejected
    /// and leaves the active color unchanged.
    pub fn set_color_hex(&mut self, hex: &str) -> EditorResult<()> {
        let color = Color::from_hex(hex)?;
        self.tools.set_color(color);
        Ok(())
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.tools.set_brush_width(width);
    }

    /// Pointer pressed at buffer coordinates. Ignored while a fill is in
    /// flight or a background decode is pending.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.decode_pending {
            return;
        }
        match self.tools.tool() {
            Tool::Fill => self.start_fill(x, y),
            Tool::Brush => self.start_stroke(x, y),
        }
    }

    /// Pointer moved while pressed; extends the active stroke if any
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(stroke) = &mut self.active_stroke {
            stroke.extend_to(&mut self.buffer, x, y);
            self.bus.emit(EditorEvent::StrokeSampled { x, y });
        }
    }

    /// Pointer released (or left the canvas); finalizes the stroke
    pub fn pointer_up(&mut self) {
        self.finish_stroke();
    }

    fn start_stroke(&mut self, x: f32, y: f32) {
        if !self.tools.begin_stroke() {
            return;
        }
        let mut stroke = StrokeRenderer::new(self.tools.color(), self.tools.brush_width());
        stroke.begin(&mut self.buffer, x, y);
        self.active_stroke = Some(stroke);
        self.bus.emit(EditorEvent::StrokeStarted { x, y });
    }

    fn start_fill(&mut self, x: f32, y: f32) {
        if !self.tools.begin_fill() {
            return;
        }
        let (px, py) = (x.floor() as i32, y.floor() as i32);
        match FillJob::start_default(&self.buffer, px, py, self.tools.color()) {
            Ok(job) => {
                // The Filling phase guard keeps the scheduler free here
                if !self.scheduler.begin(job) {
                    debug_assert!(false, "scheduler busy despite the Filling phase guard");
                    self.tools.end_fill();
                    return;
                }
                self.bus.emit(EditorEvent::FillStarted {
                    x: px,
                    y: py,
                    color: self.tools.color(),
                });
            }
            Err(err) => {
                // Seed outside the buffer; nothing was mutated
                log::debug!("fill rejected: {err}");
                self.tools.end_fill();
            }
        }
    }

    fn finish_stroke(&mut self) {
        if let Some(mut stroke) = self.active_stroke.take() {
            stroke.finish();
            self.tools.end_stroke();
            self.bus.emit(EditorEvent::StrokeCompleted);
        }
    }

    /// Drive the in-flight fill by one frame's chunk. Returns true while
    /// the buffer holds fill output that still needs presenting, the
    /// repaint-request signal for the shell.
    pub fn frame(&mut self) -> bool {
        match self.scheduler.tick(&mut self.buffer, &self.bus) {
            SchedulerStatus::Running => true,
            SchedulerStatus::Finished => {
                self.tools.end_fill();
                // The completing advance painted pixels too; one more
                // frame is needed to present them
                true
            }
            SchedulerStatus::Idle => false,
        }
    }

    /// A background decode started; gate buffer mutation until it
    /// settles via [`load_background`](Self::load_background) or
    /// [`background_decode_failed`](Self::background_decode_failed).
    pub fn background_decode_started(&mut self) {
        self.finish_stroke();
        self.decode_pending = true;
    }

    /// The pending decode failed; the buffer stays untouched
    pub fn background_decode_failed(&mut self) {
        self.decode_pending = false;
    }

    /// Replace the buffer contents with a decoded background image
    pub fn load_background(&mut self, source: &DynamicImage) {
        self.buffer.load_background(source);
        self.decode_pending = false;
        self.bus.emit(EditorEvent::BackgroundLoaded {
            width: source.width(),
            height: source.height(),
        });
    }

    /// Encode the current buffer as a PNG
    pub fn export_png(&self) -> EditorResult<Vec<u8>> {
        self.buffer.export_png()
    }
}
