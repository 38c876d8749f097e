//! Family name lookup over installed and registered fonts

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use parking_lot::Mutex;

use textmark_core::{
    error::{FontLoadError, Result},
    traits::{FontRef, FontResolver},
    FontStyle,
};

use crate::font::Font;

/// Extra font directories, separated like `PATH`
pub const FONT_DIRS_ENV: &str = "TEXTMARK_FONT_DIRS";

/// Resolves family names against a `fontdb` database
///
/// Faces are parsed once per family and style and kept for the lifetime of
/// this value. Generic names (`sans-serif`, `serif`, `monospace`, `cursive`,
/// `fantasy`) map to the database's generic families.
pub struct SystemFonts {
    db: Database,
    cache: Mutex<HashMap<(String, FontStyle), Arc<Font>>>,
}

impl SystemFonts {
    /// Every font installed on this machine
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self::from_database(db)
    }

    /// System fonts plus the directories listed in `TEXTMARK_FONT_DIRS`
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Some(dirs) = std::env::var_os(FONT_DIRS_ENV) {
            for dir in std::env::split_paths(&dirs) {
                log::info!("Loading fonts from {} via {}", dir.display(), FONT_DIRS_ENV);
                builder = builder.font_dir(dir);
            }
        }
        builder.build()
    }

    /// Start from an empty database and pick the sources
    pub fn builder() -> SystemFontsBuilder {
        SystemFontsBuilder::default()
    }

    /// Wrap a database you filled yourself
    pub fn from_database(db: Database) -> Self {
        log::debug!("Font database holds {} faces", db.len());
        Self {
            db,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Faces known to the database
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Faces parsed so far
    pub fn cached_count(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drops every parsed face; the database itself is kept
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    fn load(&self, family: &str, style: FontStyle) -> Result<Font> {
        let families = [family_for(family)];
        let query = Query {
            families: &families,
            weight: if style.bold {
                Weight::BOLD
            } else {
                Weight::NORMAL
            },
            stretch: Stretch::Normal,
            style: if style.italic {
                Style::Italic
            } else {
                Style::Normal
            },
        };

        let id = self
            .db
            .query(&query)
            .ok_or_else(|| FontLoadError::SystemFontNotFound(family.to_string()))?;

        self.db
            .with_face_data(id, |data, index| Font::from_data_index(data.to_vec(), index))
            .ok_or(FontLoadError::InvalidData)?
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver for SystemFonts {
    fn name(&self) -> &'static str {
        "fontdb"
    }

    fn resolve(&self, family: &str, style: FontStyle) -> Result<Arc<dyn FontRef>> {
        let key = (family.to_string(), style);

        if let Some(font) = self.cache.lock().get(&key) {
            return Ok(font.clone());
        }

        let font = Arc::new(self.load(family, style)?);
        log::debug!("Resolved font family {:?} ({:?})", family, style);
        self.cache.lock().insert(key, font.clone());

        Ok(font)
    }
}

fn family_for(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" | "sans serif" | "sansserif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}

/// Choose where [`SystemFonts`] looks for faces
#[derive(Default)]
pub struct SystemFontsBuilder {
    skip_system: bool,
    dirs: Vec<PathBuf>,
    data: Vec<Vec<u8>>,
}

impl SystemFontsBuilder {
    /// Whether installed fonts are loaded (on by default)
    pub fn system_fonts(mut self, enabled: bool) -> Self {
        self.skip_system = !enabled;
        self
    }

    /// Scan a directory (recursively) for font files
    pub fn font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    /// Register a font held in memory
    pub fn font_data(mut self, data: Vec<u8>) -> Self {
        self.data.push(data);
        self
    }

    pub fn build(self) -> SystemFonts {
        let mut db = Database::new();
        if !self.skip_system {
            db.load_system_fonts();
        }
        for dir in &self.dirs {
            db.load_fonts_dir(dir);
        }
        for data in self.data {
            db.load_font_data(data);
        }
        SystemFonts::from_database(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmark_core::WatermarkError;

    #[test]
    fn test_generic_families() {
        assert_eq!(family_for("sans-serif"), Family::SansSerif);
        assert_eq!(family_for("Serif"), Family::Serif);
        assert_eq!(family_for("MONOSPACE"), Family::Monospace);
        assert_eq!(family_for("Arial"), Family::Name("Arial"));
    }

    #[test]
    fn test_empty_database_reports_missing_family() {
        let fonts = SystemFonts::builder().system_fonts(false).build();
        assert_eq!(fonts.face_count(), 0);

        let err = fonts.resolve("Arial", FontStyle::REGULAR).err();
        assert!(matches!(
            err,
            Some(WatermarkError::FontLoad(FontLoadError::SystemFontNotFound(ref name))) if name == "Arial"
        ));
        assert_eq!(fonts.cached_count(), 0);
    }

    #[test]
    fn test_garbage_data_is_not_registered() {
        let fonts = SystemFonts::builder()
            .system_fonts(false)
            .font_data(vec![0; 64])
            .build();
        assert_eq!(fonts.face_count(), 0);
    }
}
