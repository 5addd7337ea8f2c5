use serde::{Deserialize, Serialize};

use crate::color::Color;

pub const MIN_BRUSH_WIDTH: u32 = 1;
pub const MAX_BRUSH_WIDTH: u32 = 50;

/// The active tool. The eraser is not a separate tool, it is the brush
/// painting white, which matches how a coloring page is "blanked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Fill,
}

/// Which interaction is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Stroking,
    Filling,
}

/// Tool selection and interaction phase for one editing session.
///
/// The phase gates pointer input: a fill is exclusive, so a pointer-down
/// while `Filling` is ignored entirely, and a second pointer-down while
/// `Stroking` is ignored too. Settings (tool, color, width) persist
/// across sessions; the phase is transient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    tool: Tool,
    color: Color,
    brush_width: u32,
    #[serde(skip)]
    phase: Phase,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            // Default swatch, a warm red
            color: Color::opaque(0xff, 0x6b, 0x6b),
            brush_width: 10,
            phase: Phase::Idle,
        }
    }
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Brush width is clamped into `[1, 50]` at this boundary
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }

    /// Try to enter the `Stroking` phase. Refused unless idle.
    pub fn begin_stroke(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Stroking;
        true
    }

    /// Leave the `Stroking` phase
    pub fn end_stroke(&mut self) {
        if self.phase == Phase::Stroking {
            self.phase = Phase::Idle;
        }
    }

    /// Try to enter the `Filling` phase. Refused unless idle, which is
    /// what makes the fill exclusive.
    pub fn begin_fill(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Filling;
        true
    }

    /// Leave the `Filling` phase once the fill has run to completion
    pub fn end_fill(&mut self) {
        if self.phase == Phase::Filling {
            self.phase = Phase::Idle;
        }
    }
}
