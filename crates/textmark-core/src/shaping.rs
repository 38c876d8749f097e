//! Single-line measurement
//!
//! Glyphs advance left to right, one per char, with no wrapping: a line
//! longer than the image simply overflows it.

use crate::traits::{FontRef, GlyphId};

/// A glyph placed along the line, x relative to the line start
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub id: GlyphId,
    pub x: f32,
    pub advance: f32,
    pub cluster: u32,
}

/// Measured line ready for outlining
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedLine {
    pub glyphs: Vec<PositionedGlyph>,
    /// Sum of all advances, in pixels
    pub width: f32,
    /// Pixel size the advances were scaled to
    pub size: f32,
}

/// Lay `text` out on one line at `size` pixels
pub fn shape_line(text: &str, font: &dyn FontRef, size: f32) -> ShapedLine {
    log::debug!("Shaping {} chars at {}px", text.chars().count(), size);

    let mut glyphs = Vec::with_capacity(text.len());
    let mut x_advance = 0.0;
    let upem = font.units_per_em().max(1) as f32;

    for (cluster, ch) in text.char_indices() {
        // Use .notdef (0) if not found
        let glyph_id = font.glyph_id(ch).unwrap_or(0);
        let advance = font.advance_width(glyph_id) * size / upem;

        glyphs.push(PositionedGlyph {
            id: glyph_id,
            x: x_advance,
            advance,
            cluster: cluster as u32,
        });

        x_advance += advance;
    }

    ShapedLine {
        glyphs,
        width: x_advance,
        size,
    }
}
