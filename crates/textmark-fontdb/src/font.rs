//! In-memory font faces
//!
//! Fonts store their raw data and create a `read-fonts` view on demand for
//! parsing, so collections (TTC) with several faces work the same way as
//! single-face files.

use std::fs;
use std::io;
use std::path::Path;

use read_fonts::{types::GlyphId, FontRef as ReadFontRef, TableProvider};

use textmark_core::{
    error::{FontLoadError, Result, WatermarkError},
    traits::FontRef as TextmarkFontRef,
};

/// A font that's been brought into memory, ready to measure and outline
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
    ascender: f32,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                WatermarkError::from(FontLoadError::FileNotFound(path.display().to_string()))
            },
            _ => WatermarkError::Io(e),
        })?;

        Self::from_data_index(data, face_index)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .map_err(|_| FontLoadError::InvalidData)?;

        // Windows ascent matches where GDI-style text boxes put the baseline;
        // hhea is the fallback for fonts without an OS/2 table
        let ascender = font_ref
            .os2()
            .map(|os2| os2.us_win_ascent() as f32)
            .ok()
            .filter(|ascent| *ascent > 0.0)
            .or_else(|| {
                font_ref
                    .hhea()
                    .ok()
                    .map(|hhea| hhea.ascender().to_i16() as f32)
            })
            .unwrap_or(units_per_em as f32 * 0.8);

        log::debug!(
            "Loaded font face {}: upem={}, ascender={}",
            face_index,
            units_per_em,
            ascender
        );

        Ok(Font {
            data,
            face_index,
            units_per_em,
            ascender,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Finds which glyph draws this character
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }

    /// Advance of this glyph in font units
    pub fn advance_width(&self, glyph_id: u32) -> f32 {
        self.font_ref()
            .and_then(|font| {
                let hmtx = font.hmtx().ok()?;
                hmtx.advance(GlyphId::new(glyph_id))
            })
            .map(f32::from)
            // Half an em when metrics are missing
            .unwrap_or(self.units_per_em as f32 / 2.0)
    }
}

impl TextmarkFontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn ascender(&self) -> f32 {
        self.ascender
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.glyph_id(ch)
    }

    fn advance_width(&self, glyph_id: u32) -> f32 {
        self.advance_width(glyph_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_from_garbage_data() {
        let result = Font::from_data(vec![0; 100]);
        assert!(matches!(
            result,
            Err(WatermarkError::FontLoad(FontLoadError::InvalidData))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Font::from_file("/definitely/not/here.ttf");
        assert!(matches!(
            result,
            Err(WatermarkError::FontLoad(FontLoadError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_unreadable_path_is_an_io_error() {
        let dir = std::env::temp_dir();
        let result = Font::from_file(&dir);
        assert!(matches!(result, Err(WatermarkError::Io(_))));
    }
}
