use image::DynamicImage;

use crate::error::{EditorError, EditorResult};

/// A decoded background image ready to hand to the session
pub struct LoadedBackground {
    pub name: String,
    pub image: DynamicImage,
}

/// Decode image bytes into a background.
///
/// This is the seam the opaque input collaborators plug into: file
/// pickers, PDF rasterizers and photo-to-outline converters all end up
/// producing bytes that land here. Decode failure surfaces as a
/// descriptive error and nothing downstream is touched.
pub fn decode_background(name: &str, bytes: &[u8]) -> EditorResult<LoadedBackground> {
    let image = image::load_from_memory(bytes).map_err(EditorError::from)?;
    log::info!(
        "decoded background {:?} ({}x{})",
        name,
        image.width(),
        image.height()
    );
    Ok(LoadedBackground {
        name: name.to_owned(),
        image,
    })
}

/// Watches the egui context for files dropped onto the window and decodes
/// them as background images.
#[derive(Default)]
pub struct BackgroundLoader;

impl BackgroundLoader {
    pub fn new() -> Self {
        Self
    }

    /// Process any newly dropped file. egui surfaces dropped files for a
    /// single frame, so polling once per update is enough.
    pub fn poll_dropped_file(&mut self, ctx: &egui::Context) -> Option<EditorResult<LoadedBackground>> {
        let file = ctx.input(|i| i.raw.dropped_files.first().cloned())?;

        let name = if let Some(path) = &file.path {
            path.display().to_string()
        } else if !file.name.is_empty() {
            file.name.clone()
        } else {
            "dropped file".to_owned()
        };

        // Web drops arrive as bytes; native drops only carry a path
        let bytes = match &file.bytes {
            Some(bytes) => bytes.to_vec(),
            None => match read_path(&file) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::warn!("failed to read dropped file {name:?}: {err}");
                    return Some(Err(EditorError::ImageLoad(image::ImageError::IoError(err))));
                }
            },
        };

        Some(decode_background(&name, &bytes))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_path(file: &egui::DroppedFile) -> std::io::Result<Vec<u8>> {
    match &file.path {
        Some(path) => std::fs::read(path),
        None => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "dropped file has no path",
        )),
    }
}

#[cfg(target_arch = "wasm32")]
fn read_path(_file: &egui::DroppedFile) -> std::io::Result<Vec<u8>> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "dropped file has no bytes",
    ))
}
