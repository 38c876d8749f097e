//! Textmark Core: from a few options to pixels on an image
//!
//! A watermark is a line of text sitting in a semi-transparent band at one
//! of nine spots on an image. This crate holds everything that decides
//! where that band and text go and in which order they are painted. Font
//! lookup, glyph outlines and the pixels themselves come from
//! collaborators behind the traits in [`traits`].
//!
//! ## The Render Pass
//!
//! 1. **Measure** - The text is laid out on a single line, never wrapped
//! 2. **Place** - The band rectangle and text origin follow the [`TargetSpot`]
//! 3. **Background** - The band is filled
//! 4. **Outline** - Glyph geometry is built and stroked
//! 5. **Fill** - The same geometry is filled with the text color
//!
//! Layers whose color has zero alpha are skipped outright.
//!
//! ## Wire It Up
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use textmark_core::{Color, TargetSpot, Watermarker};
//!
//! # use textmark_core::traits::*;
//! # use textmark_core::{FontStyle, RenderQuality};
//! # struct Fonts;
//! # impl FontResolver for Fonts {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn resolve(&self, _: &str, _: FontStyle) -> textmark_core::Result<Arc<dyn FontRef>> { unimplemented!() }
//! # }
//! # struct Outliner;
//! # impl GlyphOutliner for Outliner {
//! #     fn name(&self) -> &'static str { "test" }
//! #     fn outline(&self, _: &textmark_core::ShapedLine, _: &dyn FontRef, _: FontStyle, _: textmark_core::kurbo::Point)
//! #         -> textmark_core::Result<textmark_core::kurbo::BezPath> { unimplemented!() }
//! # }
//! # struct Image;
//! # impl Surface for Image {
//! #     fn width(&self) -> u32 { 400 }
//! #     fn height(&self) -> u32 { 300 }
//! #     fn context(&mut self, _: RenderQuality) -> textmark_core::Result<Box<dyn DrawContext + '_>> { unimplemented!() }
//! # }
//! # let mut image = Image;
//! let watermarker = Watermarker::builder()
//!     .fonts(Arc::new(Fonts))
//!     .outliner(Arc::new(Outliner))
//!     .build()?;
//!
//! watermarker.apply_text_watermark(&mut image, "SAMPLE", |o| {
//!     o.spot = TargetSpot::BottomRight;
//!     o.background_color = Color::rgba(0, 0, 0, 96);
//!     o.outline_color = Color::black();
//! })?;
//! # Ok::<(), textmark_core::WatermarkError>(())
//! ```

pub mod color;
pub mod error;
pub mod layout;
pub mod options;
pub mod shaping;
pub mod spot;
pub mod traits;
pub mod watermark;

pub use color::Color;
pub use error::{Result, WatermarkError};
pub use layout::{background_rect, text_offset, text_origin, Rect};
pub use options::{FontStyle, LegacyWatermark, RenderQuality, WatermarkOptions};
pub use shaping::{shape_line, PositionedGlyph, ShapedLine};
pub use spot::{Column, Row, TargetSpot};
pub use traits::{DrawContext, FontRef, FontResolver, GlyphOutliner, Surface};
pub use watermark::{Watermarker, WatermarkerBuilder};

pub use kurbo;
