//! Skia backend - watermarks painted with tiny-skia
//!
//! Two collaborators for the Textmark core live here:
//!
//! - [`SkiaSurface`] wraps a `tiny_skia::Pixmap` (or any premultiplied RGBA8
//!   buffer) and paints bands and glyph paths onto it, source-over.
//! - [`SkrifaOutliner`] turns a measured line into a `kurbo::BezPath` from
//!   the font's own outlines, ready to be stroked and filled.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use textmark_core::{Color, Watermarker};
//! use textmark_fontdb::SystemFonts;
//! use textmark_render_skia::{SkiaSurface, SkrifaOutliner};
//!
//! let mut pixmap = tiny_skia::Pixmap::new(400, 300).unwrap();
//! let watermarker = Watermarker::builder()
//!     .fonts(Arc::new(SystemFonts::new()))
//!     .outliner(Arc::new(SkrifaOutliner))
//!     .build()?;
//!
//! watermarker.apply_text_watermark(&mut SkiaSurface::new(&mut pixmap), "SAMPLE", |o| {
//!     o.font_family = "sans-serif".into();
//!     o.outline_color = Color::black();
//! })?;
//! # Ok::<(), textmark_core::WatermarkError>(())
//! ```

mod outline;
mod surface;

pub use outline::SkrifaOutliner;
pub use surface::SkiaSurface;

pub use tiny_skia;
