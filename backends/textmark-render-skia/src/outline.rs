//! Glyph outline geometry via skrifa
//!
//! Outlines come out of the font y-up around each glyph's origin. The pen
//! below flips them and shifts them onto the image: x by the glyph's
//! position along the line, y to a baseline one ascender below the line's
//! top edge.

use kurbo::{BezPath, Point, Rect as PathRect, Shape};
use skrifa::{
    instance::{LocationRef, Size},
    metrics::Decoration,
    outline::DrawSettings,
    MetadataProvider,
};

use textmark_core::{
    error::{RenderError, Result},
    traits::{FontRef, GlyphOutliner},
    FontStyle, ShapedLine,
};

/// Unhinted skrifa outlines, the default glyph geometry source
#[derive(Debug, Default, Clone, Copy)]
pub struct SkrifaOutliner;

impl SkrifaOutliner {
    pub fn new() -> Self {
        Self
    }
}

impl GlyphOutliner for SkrifaOutliner {
    fn name(&self) -> &'static str {
        "skrifa"
    }

    fn outline(
        &self,
        line: &ShapedLine,
        font: &dyn FontRef,
        style: FontStyle,
        origin: Point,
    ) -> Result<BezPath> {
        let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;
        let outlines = font_ref.outline_glyphs();

        let size = Size::new(line.size);
        let scale = line.size as f64 / font.units_per_em().max(1) as f64;
        let baseline = origin.y + font.ascender() as f64 * scale;

        let mut path = BezPath::new();
        for glyph in &line.glyphs {
            let Some(outline) = outlines.get(skrifa::GlyphId::new(glyph.id)) else {
                log::warn!("Skrifa: glyph {} has no outline, skipping", glyph.id);
                continue;
            };

            let mut pen = PathPen {
                path: &mut path,
                x: origin.x + glyph.x as f64,
                baseline,
            };
            let settings = DrawSettings::unhinted(size, LocationRef::default());
            outline
                .draw(settings, &mut pen)
                .map_err(|_| RenderError::OutlineExtractionFailed)?;
        }

        if style.has_decorations() && line.width > 0.0 {
            let metrics = font_ref.metrics(size, LocationRef::default());
            let span = (origin.x, origin.x + line.width as f64);
            // Match the glyphs' winding so overlaps don't punch holes
            let clockwise = path.area() >= 0.0;

            if style.underline {
                let deco = metrics.underline.unwrap_or(Decoration {
                    offset: -line.size * 0.1,
                    thickness: line.size / 14.0,
                });
                push_decoration(&mut path, span, baseline, deco, clockwise);
            }
            if style.strikeout {
                let deco = metrics.strikeout.unwrap_or(Decoration {
                    offset: line.size * 0.3,
                    thickness: line.size / 14.0,
                });
                push_decoration(&mut path, span, baseline, deco, clockwise);
            }
        }

        log::debug!(
            "Skrifa: outlined {} glyphs at {}px, bbox={:?}",
            line.glyphs.len(),
            line.size,
            path.bounding_box()
        );

        Ok(path)
    }
}

/// Decoration offsets are the top of the stroke, measured up from the baseline
fn push_decoration(
    path: &mut BezPath,
    (x0, x1): (f64, f64),
    baseline: f64,
    deco: Decoration,
    clockwise: bool,
) {
    let top = baseline - deco.offset as f64;
    let thickness = (deco.thickness as f64).max(1.0);
    let rect = PathRect::new(x0, top, x1, top + thickness);

    path.move_to((rect.x0, rect.y0));
    if clockwise {
        path.line_to((rect.x1, rect.y0));
        path.line_to((rect.x1, rect.y1));
        path.line_to((rect.x0, rect.y1));
    } else {
        path.line_to((rect.x0, rect.y1));
        path.line_to((rect.x1, rect.y1));
        path.line_to((rect.x1, rect.y0));
    }
    path.close_path();
}

/// Bridge between skrifa's outline commands and kurbo's path format
///
/// skrifa already scales to the requested size; the pen only moves the
/// glyph into place and flips it to y-down.
struct PathPen<'a> {
    path: &'a mut BezPath,
    x: f64,
    baseline: f64,
}

impl PathPen<'_> {
    fn point(&self, x: f32, y: f32) -> (f64, f64) {
        (self.x + x as f64, self.baseline - y as f64)
    }
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let c = self.point(cx0, cy0);
        let p = self.point(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let c0 = self.point(cx0, cy0);
        let c1 = self.point(cx1, cy1);
        let p = self.point(x, y);
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
