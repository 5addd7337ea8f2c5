use crate::loader::BackgroundLoader;
use crate::panels::{CanvasPanel, ToolsAction, ToolsPanel};
use crate::session::EditorSession;
use crate::tool::ToolState;

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

// Storage key for the serialized tool settings
const SETTINGS_KEY: &str = "coloring_book_settings";

/// The eframe application shell around one editing session
pub struct ColoringApp {
    session: EditorSession,
    canvas: CanvasPanel,
    tools_panel: ToolsPanel,
    loader: BackgroundLoader,
    status: Option<String>,
}

impl ColoringApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore tool settings from the previous session, if any
        let tools = cc
            .storage
            .and_then(|storage| storage.get_string(SETTINGS_KEY))
            .and_then(|json| serde_json::from_str::<ToolState>(&json).ok())
            .unwrap_or_default();

        let session = EditorSession::with_tools(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, tools);
        let tools_panel = ToolsPanel::new(&session);
        Self {
            session,
            canvas: CanvasPanel::new(),
            tools_panel,
            loader: BackgroundLoader::new(),
            status: None,
        }
    }

    fn process_dropped_files(&mut self, ctx: &egui::Context) {
        let Some(result) = self.loader.poll_dropped_file(ctx) else {
            return;
        };
        match result {
            Ok(background) => {
                self.session.load_background(&background.image);
                self.status = Some(format!("Loaded {}", background.name));
            }
            Err(err) => {
                // Decode failed; the buffer is left unchanged
                self.session.background_decode_failed();
                self.status = Some(format!("Could not load background: {err}"));
            }
        }
    }

    fn export(&mut self) {
        use crate::util::time;

        let name = format!("my-coloring-{}.png", time::timestamp_secs());
        let result = self
            .session
            .export_png()
            .map_err(|err| err.to_string())
            .and_then(|png| save_png(&name, &png));
        match result {
            Ok(()) => {
                log::info!("exported {name}");
                self.status = Some(format!("Saved {name}"));
            }
            Err(err) => self.status = Some(format!("Could not save {name}: {err}")),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_png(name: &str, png: &[u8]) -> Result<(), String> {
    std::fs::write(name, png).map_err(|err| err.to_string())
}

/// Trigger a browser download by clicking a transient anchor that carries
/// the PNG as a base64 data URL.
#[cfg(target_arch = "wasm32")]
fn save_png(name: &str, png: &[u8]) -> Result<(), String> {
    use base64::Engine as _;
    use wasm_bindgen::JsCast as _;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "could not create download link".to_owned())?
        .dyn_into()
        .map_err(|_| "could not create download link".to_owned())?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    anchor.set_href(&format!("data:image/png;base64,{encoded}"));
    anchor.set_download(name);
    anchor.click();
    Ok(())
}

impl eframe::App for ColoringApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self.session.tools()) {
            storage.set_string(SETTINGS_KEY, json);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_dropped_files(ctx);

        if let Some(ToolsAction::ExportRequested) = self.tools_panel.show(ctx, &mut self.session) {
            self.export();
        }

        if let Some(status) = self.status.clone() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(status);
                    if ui.small_button("✖").clicked() {
                        self.status = None;
                    }
                });
            });
        }

        self.canvas.show(ctx, &mut self.session);

        // One fill chunk per frame; keep the frames coming while the
        // fill animation runs
        if self.session.frame() {
            ctx.request_repaint();
        }
    }
}
