//! Textmark - text watermarks for raster images
//!
//! Put a line of text, with an optional band behind it and an optional
//! outline around it, at one of nine spots on an image you already have in
//! memory. Nothing is decoded or encoded here: you hand over pixels, they
//! come back watermarked.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "fontdb", feature = "render-skia"))]
//! # {
//! use textmark::{tiny_skia::Pixmap, Color, TargetSpot};
//!
//! let mut pixmap = Pixmap::new(800, 600).unwrap();
//!
//! textmark::watermark_pixmap(&mut pixmap, "© Textmark", |o| {
//!     o.spot = TargetSpot::BottomRight;
//!     o.font_family = "sans-serif".into();
//!     o.background_color = Color::rgba(0, 0, 0, 96);
//!     o.outline_color = Color::black();
//! })?;
//! # }
//! # Ok::<(), textmark::WatermarkError>(())
//! ```
//!
//! For many images, build one [`Watermarker`] with [`system`] and reuse
//! it; fonts are parsed once per watermarker.
//!
//! ## Feature Flags
//!
//! - `fontdb` (default) - family lookup over installed fonts
//! - `render-skia` (default) - tiny-skia surfaces and skrifa outlines

pub use textmark_core::*;

#[cfg(feature = "fontdb")]
pub use textmark_fontdb::{Font, SystemFonts, SystemFontsBuilder, FONT_DIRS_ENV};

#[cfg(feature = "render-skia")]
pub use textmark_render_skia::{tiny_skia, SkiaSurface, SkrifaOutliner};

#[cfg(all(feature = "fontdb", feature = "render-skia"))]
mod shortcuts {
    use std::sync::Arc;

    use textmark_core::{LegacyWatermark, Result, WatermarkOptions, Watermarker};
    use textmark_fontdb::SystemFonts;
    use textmark_render_skia::{tiny_skia, SkiaSurface, SkrifaOutliner};

    /// A watermarker over installed fonts (plus `TEXTMARK_FONT_DIRS`) and
    /// the Skia backend
    pub fn system() -> Result<Watermarker> {
        with_fonts(SystemFonts::from_env())
    }

    /// A watermarker over the fonts you picked and the Skia backend
    pub fn with_fonts(fonts: SystemFonts) -> Result<Watermarker> {
        log::debug!("Textmark: {} font faces available", fonts.face_count());
        Watermarker::builder()
            .fonts(Arc::new(fonts))
            .outliner(Arc::new(SkrifaOutliner::new()))
            .build()
    }

    /// One-shot watermark on a pixmap; loads the system fonts every call
    pub fn watermark_pixmap(
        pixmap: &mut tiny_skia::Pixmap,
        text: &str,
        configure: impl FnOnce(&mut WatermarkOptions),
    ) -> Result<()> {
        system()?.apply_text_watermark(&mut SkiaSurface::new(pixmap), text, configure)
    }

    /// One-shot fixed-signature watermark on a pixmap
    #[deprecated(note = "use `watermark_pixmap` instead")]
    #[allow(deprecated)]
    pub fn legacy_watermark_pixmap(
        pixmap: &mut tiny_skia::Pixmap,
        text: &str,
        args: &LegacyWatermark,
    ) -> Result<()> {
        system()?.legacy_text_watermark(&mut SkiaSurface::new(pixmap), text, args)
    }
}

#[cfg(all(feature = "fontdb", feature = "render-skia"))]
#[allow(deprecated)]
pub use shortcuts::{legacy_watermark_pixmap, system, watermark_pixmap, with_fonts};
