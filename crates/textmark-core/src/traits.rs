//! The contracts between the watermark core and its collaborators
//!
//! The core never touches pixels or font files itself. It measures text
//! through a [`FontRef`], asks a [`GlyphOutliner`] for glyph geometry and
//! paints through the [`DrawContext`] a [`Surface`] hands out.
//!
//! - [`FontRef`] - Your window into font data and metrics
//! - [`FontResolver`] - Family name and style to a loaded face
//! - [`GlyphOutliner`] - Shaped text to vector outlines
//! - [`Surface`] / [`DrawContext`] - The image being watermarked

use std::sync::Arc;

use kurbo::{BezPath, Point};

use crate::{
    color::Color,
    error::Result,
    layout::Rect,
    options::{FontStyle, RenderQuality},
    shaping::ShapedLine,
};

/// Unique identifier for a glyph within a font
pub type GlyphId = u32;

/// Your key to unlocking font secrets
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontRef for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         2048
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<GlyphId> {
///         Some(42)
///     }
///
///     fn advance_width(&self, glyph_id: GlyphId) -> f32 {
///         1139.0
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Face inside a collection, 0 for single-face files
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Distance from the top of the line to the baseline, in font units
    fn ascender(&self) -> f32 {
        self.units_per_em() as f32 * 0.8
    }

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<GlyphId>;

    /// How wide this glyph stands in font units
    fn advance_width(&self, glyph_id: GlyphId) -> f32;
}

/// Turns a family name into a loaded face
pub trait FontResolver: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Unknown families fail with
    /// [`FontLoadError::SystemFontNotFound`](crate::error::FontLoadError::SystemFontNotFound)
    fn resolve(&self, family: &str, style: FontStyle) -> Result<Arc<dyn FontRef>>;
}

/// Builds the vector geometry of a shaped line
pub trait GlyphOutliner: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Outline `line` in image coordinates (y grows downward) with the
    /// top-left corner of the line box at `origin`.
    ///
    /// Underline and strikeout requested by `style` are part of the path.
    fn outline(
        &self,
        line: &ShapedLine,
        font: &dyn FontRef,
        style: FontStyle,
        origin: Point,
    ) -> Result<BezPath>;
}

/// A mutable image the watermark is painted onto
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Acquire a drawing context for the duration of one render call.
    ///
    /// Everything the context allocates is released when it is dropped,
    /// whether the render finished or bailed out with an error.
    fn context(&mut self, quality: RenderQuality) -> Result<Box<dyn DrawContext + '_>>;
}

/// Paint operations, composited source-over onto the surface
pub trait DrawContext {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f32) -> Result<()>;

    fn fill_path(&mut self, path: &BezPath, color: Color) -> Result<()>;
}
