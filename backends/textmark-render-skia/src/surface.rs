//! Image surfaces backed by tiny-skia pixmaps

use kurbo::{BezPath, PathEl};
use tiny_skia::{
    BlendMode, FillRule, Paint, PathBuilder, Pixmap, PixmapMut, Stroke, Transform,
};

use textmark_core::{
    error::{RenderError, Result},
    traits::{DrawContext, Surface},
    Color, Rect, RenderQuality,
};

/// A premultiplied RGBA pixmap being watermarked in place
///
/// Borrowing the pixmap mutably for the surface's lifetime is what keeps two
/// watermarks from painting the same image at once.
pub struct SkiaSurface<'a> {
    pixmap: PixmapMut<'a>,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self {
            pixmap: pixmap.as_mut(),
        }
    }

    pub fn from_pixmap_mut(pixmap: PixmapMut<'a>) -> Self {
        Self { pixmap }
    }

    /// Wrap a caller-owned premultiplied RGBA8 buffer
    pub fn from_bytes(data: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let pixmap = PixmapMut::from_bytes(data, width, height)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }
}

impl Surface for SkiaSurface<'_> {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn context(&mut self, quality: RenderQuality) -> Result<Box<dyn DrawContext + '_>> {
        log::debug!(
            "Skia: drawing on {}x{} ({:?})",
            self.pixmap.width(),
            self.pixmap.height(),
            quality
        );
        Ok(Box::new(SkiaContext {
            pixmap: &mut self.pixmap,
            quality,
        }))
    }
}

/// Paint operations for one render call; holds nothing past its drop
struct SkiaContext<'s, 'a> {
    pixmap: &'s mut PixmapMut<'a>,
    quality: RenderQuality,
}

impl DrawContext for SkiaContext<'_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        let area = tiny_skia::Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        );
        let Some(area) = area.filter(|_| !rect.is_empty()) else {
            log::warn!("Skia: empty rectangle {:?}, nothing to fill", rect);
            return Ok(());
        };

        let paint = solid_paint(color, self.quality.smoothing);
        self.pixmap
            .fill_rect(area, &paint, Transform::identity(), None);
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f32) -> Result<()> {
        let Some(path) = to_skia_path(path)? else {
            return Ok(());
        };

        let paint = solid_paint(color, self.quality.text_antialias);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) -> Result<()> {
        let Some(path) = to_skia_path(path)? else {
            return Ok(());
        };

        let paint = solid_paint(color, self.quality.text_antialias);
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

fn solid_paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias,
        blend_mode: BlendMode::SourceOver,
        ..Paint::default()
    };
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint
}

/// Translate kurbo's path format into tiny-skia's native format.
///
/// An empty path (blank text) is `None`, not an error.
fn to_skia_path(path: &BezPath) -> Result<Option<tiny_skia::Path>> {
    if path.elements().is_empty() {
        return Ok(None);
    }

    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }

    builder
        .finish()
        .map(Some)
        .ok_or_else(|| RenderError::PathBuildingFailed.into())
}
