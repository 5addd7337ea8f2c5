use egui::Slider;

use crate::color::Color;
use crate::session::EditorSession;
use crate::tool::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, Tool};

// Preset swatches, kid-friendly primaries plus black and white
const PRESET_COLORS: [Color; 10] = [
    Color::opaque(0xff, 0x00, 0x00),
    Color::opaque(0x00, 0xff, 0x00),
    Color::opaque(0x00, 0x00, 0xff),
    Color::opaque(0xff, 0xff, 0x00),
    Color::opaque(0xff, 0x00, 0xff),
    Color::opaque(0x00, 0xff, 0xff),
    Color::opaque(0x00, 0x00, 0x00),
    Color::opaque(0xff, 0xff, 0xff),
    Color::opaque(0xff, 0xa5, 0x00),
    Color::opaque(0x80, 0x00, 0x80),
];

/// Requests the panel hands back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolsAction {
    ExportRequested,
}

/// The left-hand tool panel: tool buttons, palette, hex input and brush
/// width slider. All color/width input is validated here before it
/// reaches the session.
pub struct ToolsPanel {
    hex_input: String,
    hex_error: Option<String>,
}

impl ToolsPanel {
    pub fn new(session: &EditorSession) -> Self {
        Self {
            hex_input: session.tools().color().to_hex(),
            hex_error: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, session: &mut EditorSession) -> Option<ToolsAction> {
        let mut action = None;

        egui::SidePanel::left("tools_panel").show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            self.tool_buttons(ui, session);
            ui.separator();

            ui.label("Colors:");
            self.palette(ui, session);
            self.hex_field(ui, session);
            ui.separator();

            let mut width = session.tools().brush_width();
            ui.label("Brush size:");
            if ui
                .add(Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH))
                .changed()
            {
                session.set_brush_width(width);
            }
            ui.separator();

            if ui.button("💾 Save PNG").clicked() {
                action = Some(ToolsAction::ExportRequested);
            }

            if session.is_filling() {
                ui.separator();
                ui.label("Filling…");
            }
        });

        action
    }

    fn tool_buttons(&mut self, ui: &mut egui::Ui, session: &mut EditorSession) {
        let tool = session.tools().tool();
        let color = session.tools().color();
        // The eraser is the brush painting white
        let is_eraser = tool == Tool::Brush && color == Color::WHITE;
        let is_brush = tool == Tool::Brush && !is_eraser;

        ui.horizontal(|ui| {
            if ui.selectable_label(is_brush, "🖌 Brush").clicked() {
                session.select_tool(Tool::Brush);
                if session.tools().color() == Color::WHITE {
                    self.apply_color(session, Color::BLACK);
                }
            }
            if ui.selectable_label(is_eraser, "⌫ Eraser").clicked() {
                session.select_tool(Tool::Brush);
                self.apply_color(session, Color::WHITE);
            }
            if ui.selectable_label(tool == Tool::Fill, "🌊 Fill").clicked() {
                session.select_tool(Tool::Fill);
            }
        });
    }

    fn palette(&mut self, ui: &mut egui::Ui, session: &mut EditorSession) {
        ui.horizontal_wrapped(|ui| {
            for &preset in &PRESET_COLORS {
                let selected = session.tools().color() == preset;
                let button = egui::Button::new(if selected { "●" } else { " " })
                    .fill(egui::Color32::from(preset))
                    .min_size(egui::vec2(24.0, 24.0));
                if ui.add(button).clicked() {
                    self.apply_color(session, preset);
                }
            }
        });
    }

    fn hex_field(&mut self, ui: &mut egui::Ui, session: &mut EditorSession) {
        ui.horizontal(|ui| {
            ui.label("Hex:");
            let edited = ui.text_edit_singleline(&mut self.hex_input).lost_focus();
            let apply = ui.button("Apply").clicked();
            if edited || apply {
                match session.set_color_hex(&self.hex_input) {
                    Ok(()) => self.hex_error = None,
                    // Fail fast instead of silently defaulting to black
                    Err(err) => self.hex_error = Some(err.to_string()),
                }
            }
        });
        if let Some(error) = &self.hex_error {
            ui.colored_label(egui::Color32::RED, error);
        }
    }

    fn apply_color(&mut self, session: &mut EditorSession, color: Color) {
        session.set_color(color);
        self.hex_input = color.to_hex();
        self.hex_error = None;
    }
}
