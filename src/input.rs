use egui::{Pos2, Response};

use crate::coords::CoordinateMapper;
use crate::session::EditorSession;

/// Pointer events over the canvas, already mapped to buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Up,
}

/// One frame's worth of pointer state over the canvas, captured from the
/// egui response. Plain data so event translation can be driven without a
/// live UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasPointer {
    pub pointer: Option<Pos2>,
    pub drag_started: bool,
    pub dragged: bool,
    pub drag_stopped: bool,
    pub hovered: bool,
}

impl CanvasPointer {
    pub fn from_response(response: &Response) -> Self {
        Self {
            pointer: response.interact_pointer_pos(),
            drag_started: response.drag_started(),
            dragged: response.dragged(),
            drag_stopped: response.drag_stopped(),
            hovered: response.hovered(),
        }
    }
}

/// Translate this frame's canvas interaction into pointer events.
///
/// Positions go through the coordinate mapper so everything downstream
/// works in buffer pixels. A pointer that leaves the canvas mid-stroke
/// counts as a release: egui keeps reporting the drag while the button is
/// held, so the leave is detected by the mapped position falling outside
/// the display rect.
pub fn collect_pointer_events(pointer: CanvasPointer, mapper: &CoordinateMapper) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let mut left_canvas = false;

    if let Some(pos) = pointer.pointer {
        let (x, y) = mapper.to_buffer(pos);
        if pointer.drag_started {
            events.push(PointerEvent::Down { x, y });
        } else if pointer.dragged {
            if mapper.contains(pos) {
                events.push(PointerEvent::Moved { x, y });
            } else {
                left_canvas = true;
            }
        }
    }

    if pointer.drag_stopped || left_canvas || (!pointer.hovered && !pointer.dragged) {
        events.push(PointerEvent::Up);
    }

    events
}

/// Dispatch pointer events to the session
pub fn route_pointer_events(session: &mut EditorSession, events: &[PointerEvent]) {
    for event in events {
        match *event {
            PointerEvent::Down { x, y } => session.pointer_down(x, y),
            PointerEvent::Moved { x, y } => session.pointer_move(x, y),
            PointerEvent::Up => session.pointer_up(),
        }
    }
}
