#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod buffer;
pub mod color;
pub mod coords;
pub mod error;
pub mod event;
pub mod fill;
pub mod input;
pub mod loader;
pub mod panels;
pub mod scheduler;
pub mod session;
pub mod stroke;
pub mod tool;
pub mod util;

pub use app::ColoringApp;
pub use buffer::PixelBuffer;
pub use color::Color;
pub use coords::CoordinateMapper;
pub use error::{EditorError, EditorResult};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use fill::FillJob;
pub use input::{CanvasPointer, PointerEvent};
pub use scheduler::{RenderScheduler, SchedulerStatus};
pub use session::EditorSession;
pub use stroke::StrokeRenderer;
pub use tool::{Phase, Tool, ToolState};
