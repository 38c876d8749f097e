//! The render pass: measure, lay out, then paint back to front
//!
//! Two entry points share the layout engine. The configurable one reads a
//! [`WatermarkOptions`] and skips every layer whose color has zero alpha.
//! The legacy one takes `#AARRGGBB` strings, always paints the band and
//! the text fill, and never strokes.

// this_file: crates/textmark-core/src/watermark.rs

use std::sync::Arc;

use kurbo::Point;

use crate::{
    color::Color,
    error::{RenderError, Result, WatermarkError},
    layout::{background_rect, text_offset, text_origin, Rect},
    options::{validate_font_size, LegacyWatermark, RenderQuality, WatermarkOptions},
    shaping::{shape_line, ShapedLine},
    traits::{FontRef, FontResolver, GlyphOutliner, Surface},
    FontStyle, TargetSpot,
};

/// Paints text watermarks onto [`Surface`]s
///
/// Holds no per-call state, so one watermarker can serve any number of
/// surfaces. Calls on the same surface must not overlap.
///
/// ```ignore
/// use textmark_core::{Color, TargetSpot, Watermarker};
///
/// let watermarker = Watermarker::builder()
///     .fonts(my_fonts)
///     .outliner(my_outliner)
///     .build()?;
///
/// watermarker.apply_text_watermark(&mut surface, "© 2024", |o| {
///     o.spot = TargetSpot::BottomRight;
///     o.background_color = Color::rgba(0, 0, 0, 120);
/// })?;
/// ```
#[derive(Clone)]
pub struct Watermarker {
    fonts: Arc<dyn FontResolver>,
    outliner: Arc<dyn GlyphOutliner>,
}

/// Everything the paint step needs, computed before the surface is touched
struct Placement {
    font: Arc<dyn FontRef>,
    line: ShapedLine,
    band: Rect,
    origin: Point,
}

impl Watermarker {
    /// Start building a new watermarker
    pub fn builder() -> WatermarkerBuilder {
        WatermarkerBuilder::new()
    }

    pub fn new(fonts: Arc<dyn FontResolver>, outliner: Arc<dyn GlyphOutliner>) -> Self {
        Self { fonts, outliner }
    }

    /// Watermark with default options
    pub fn apply_text_watermark_default<S>(&self, surface: &mut S, text: &str) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        self.apply_text_watermark(surface, text, |_| {})
    }

    /// Watermark with options tweaked by `configure`.
    ///
    /// `configure` runs once against fresh defaults; nothing carries over
    /// between calls.
    pub fn apply_text_watermark<S>(
        &self,
        surface: &mut S,
        text: &str,
        configure: impl FnOnce(&mut WatermarkOptions),
    ) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        let options = WatermarkOptions::configured(configure);
        self.apply_text_watermark_with(surface, text, &options)
    }

    /// Watermark with a ready-made options value
    pub fn apply_text_watermark_with<S>(
        &self,
        surface: &mut S,
        text: &str,
        options: &WatermarkOptions,
    ) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        options.validate()?;

        let placement = self.place(
            surface,
            text,
            &options.font_family,
            options.font_style,
            options.font_size,
            options.spot,
            options.margin,
        )?;

        let mut ctx = surface.context(RenderQuality::HIGH)?;

        if options.background_color.is_visible() {
            ctx.fill_rect(placement.band, options.background_color)?;
        } else {
            log::trace!("Background fully transparent, skipping band");
        }

        let path = self.outliner.outline(
            &placement.line,
            placement.font.as_ref(),
            options.font_style,
            placement.origin,
        )?;

        if options.outline_color.is_visible() {
            ctx.stroke_path(&path, options.outline_color, options.outline_width)?;
        } else {
            log::trace!("Outline fully transparent, skipping stroke");
        }

        if options.text_color.is_visible() {
            ctx.fill_path(&path, options.text_color)?;
        } else {
            log::trace!("Text fully transparent, skipping fill");
        }

        Ok(())
    }

    /// Fixed-signature watermark kept for existing callers.
    ///
    /// Both colors are parsed before anything is drawn, so a malformed one
    /// leaves the surface untouched. The band is painted even when fully
    /// transparent and there is no outline.
    #[deprecated(note = "use `apply_text_watermark` instead")]
    pub fn legacy_text_watermark<S>(
        &self,
        surface: &mut S,
        text: &str,
        args: &LegacyWatermark,
    ) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        validate_font_size(args.size)?;
        let background = Color::from_argb_hex(&args.bg_color)?;
        let color = Color::from_argb_hex(&args.color)?;

        let placement = self.place(
            surface,
            text,
            &args.font_family,
            args.style,
            args.size,
            args.spot,
            args.margin,
        )?;

        let mut ctx = surface.context(RenderQuality::LEGACY)?;
        ctx.fill_rect(placement.band, background)?;

        let path = self.outliner.outline(
            &placement.line,
            placement.font.as_ref(),
            args.style,
            placement.origin,
        )?;
        ctx.fill_path(&path, color)?;

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn place<S>(
        &self,
        surface: &S,
        text: &str,
        family: &str,
        style: FontStyle,
        font_size: u32,
        spot: TargetSpot,
        margin: i32,
    ) -> Result<Placement>
    where
        S: Surface + ?Sized,
    {
        let (width, height) = dimensions(surface)?;

        let font = self.fonts.resolve(family, style)?;
        let line = shape_line(text, font.as_ref(), font_size as f32);

        let band = background_rect(width, height, font_size as i32, spot, margin);
        if band.is_empty() {
            log::warn!("Watermark band {:?} is empty on a {}x{} surface", band, width, height);
        }
        let offset = text_offset(line.width, width, spot);
        let (x, y) = text_origin(band, offset);

        log::debug!(
            "Watermark {:?} at {}: band={:?}, text width={}, origin=({}, {})",
            text,
            spot,
            band,
            line.width,
            x,
            y
        );

        Ok(Placement {
            font,
            line,
            band,
            origin: Point::new(x as f64, y as f64),
        })
    }
}

fn dimensions<S: Surface + ?Sized>(surface: &S) -> Result<(i32, i32)> {
    let (w, h) = (surface.width(), surface.height());
    match (i32::try_from(w), i32::try_from(h)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(RenderError::InvalidDimensions {
            width: w,
            height: h,
        }
        .into()),
    }
}

/// Wire up a [`Watermarker`] piece by piece
#[derive(Default)]
pub struct WatermarkerBuilder {
    fonts: Option<Arc<dyn FontResolver>>,
    outliner: Option<Arc<dyn GlyphOutliner>>,
}

impl WatermarkerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where font families are looked up
    pub fn fonts(mut self, fonts: Arc<dyn FontResolver>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Who turns text into glyph geometry
    pub fn outliner(mut self, outliner: Arc<dyn GlyphOutliner>) -> Self {
        self.outliner = Some(outliner);
        self
    }

    pub fn build(self) -> Result<Watermarker> {
        let fonts = self
            .fonts
            .ok_or_else(|| WatermarkError::Config("No font resolver configured".into()))?;
        let outliner = self
            .outliner
            .ok_or_else(|| WatermarkError::Config("No glyph outliner configured".into()))?;

        log::debug!(
            "Watermarker: fonts={}, outliner={}",
            fonts.name(),
            outliner.name()
        );

        Ok(Watermarker { fonts, outliner })
    }
}
