use std::cell::RefCell;

use crate::color::Color;
use crate::tool::Tool;

/// Events the editing core emits while the user works.
///
/// Presentation side effects (brush and bucket sound feedback, progress
/// indicators) subscribe here instead of being wired into the core, so
/// core correctness stays independent of them.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    StrokeStarted {
        x: f32,
        y: f32,
    },
    /// One pointer sample was appended to the active stroke
    StrokeSampled {
        x: f32,
        y: f32,
    },
    StrokeCompleted,
    FillStarted {
        x: i32,
        y: i32,
        color: Color,
    },
    /// The in-flight fill advanced by one frame's chunk
    FillStepped {
        pixels_painted: usize,
    },
    FillCompleted {
        pixels_painted: usize,
    },
    BackgroundLoaded {
        width: u32,
        height: u32,
    },
}

/// Implemented by collaborators that want to react to editor events
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// A simple event bus for broadcasting editor events to registered handlers
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}
