use thiserror::Error;

/// Errors that can occur in the raster editing core
#[derive(Debug, Error)]
pub enum EditorError {
    /// A coordinate landed outside the pixel buffer
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// A color string could not be parsed
    #[error("invalid color {0:?}, expected #RGB or #RRGGBB")]
    InvalidColor(String),

    /// A background image failed to decode or encode
    #[error("image load failed: {0}")]
    ImageLoad(#[from] image::ImageError),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
