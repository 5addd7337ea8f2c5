mod central_panel;
mod tools_panel;

pub use central_panel::CanvasPanel;
pub use tools_panel::{ToolsAction, ToolsPanel};
