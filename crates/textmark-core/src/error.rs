//! Error types for Textmark

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WatermarkError>;

/// Main error type for Textmark
#[derive(Debug, Error)]
pub enum WatermarkError {
    #[error("Color format error: {0}")]
    Format(#[from] ColorFormatError),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Rendering(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Legacy `#AARRGGBB` color strings that did not decode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    #[error("invalid {channel} channel in color {input:?}")]
    InvalidChannel { channel: &'static str, input: String },
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("System font not found: {0}")]
    SystemFontNotFound(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid font")]
    InvalidFont,

    #[error("Outline extraction failed")]
    OutlineExtractionFailed,

    #[error("Path building failed")]
    PathBuildingFailed,
}
