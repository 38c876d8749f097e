//! Where fonts come from: loading and family lookup for Textmark
//!
//! A watermark names its font by family ("Arial", "DejaVu Sans",
//! "sans-serif") and style. [`SystemFonts`] answers that question from the
//! fonts installed on the machine plus any directories or in-memory fonts
//! you register, and hands back a [`Font`] the core can measure and the
//! rasterizer can outline.
//!
//! A family that cannot be found is reported as
//! [`FontLoadError::SystemFontNotFound`](textmark_core::error::FontLoadError::SystemFontNotFound);
//! there is no silent fallback to another family.

mod font;
mod system;

pub use font::Font;
pub use system::{SystemFonts, SystemFontsBuilder, FONT_DIRS_ENV};
