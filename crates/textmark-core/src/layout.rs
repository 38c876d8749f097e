//! Band and text placement for each [`TargetSpot`]
//!
//! Both functions are pure and work in integer image pixels. Nothing is
//! clamped: a large font or margin on a short image can push the band above
//! the top edge or past the bottom one, and the band is drawn as computed.
//! Coordinates saturate at the `i32` range instead of wrapping.

use crate::spot::{Column, Row, TargetSpot};

/// Horizontal inset of left- and right-aligned text
pub const TEXT_INSET: i32 = 5;

/// Axis-aligned pixel rectangle, origin at the image's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Background band for `spot`.
///
/// The band is `font_size * 2` tall and always spans the full image width.
pub fn background_rect(
    image_width: i32,
    image_height: i32,
    font_size: i32,
    spot: TargetSpot,
    margin: i32,
) -> Rect {
    let band_height = font_size.saturating_mul(2);

    let y = match spot.row() {
        Row::Top => margin,
        Row::Middle => (image_height / 2).saturating_sub(band_height / 2),
        Row::Bottom => image_height
            .saturating_sub(band_height)
            .saturating_sub(margin),
    };

    Rect::new(0, y, image_width, band_height)
}

/// X coordinate of the text's left edge for `spot`.
///
/// The free space is truncated to whole pixels before centering, so odd
/// widths round toward zero.
pub fn text_offset(text_width: f32, image_width: i32, spot: TargetSpot) -> i32 {
    let free = (image_width as f32 - text_width) as i32;

    match spot.column() {
        Column::Middle => free / 2,
        Column::Right => free.saturating_sub(TEXT_INSET),
        Column::Left => TEXT_INSET,
    }
}

/// Top-left corner of the text inside `band`: a quarter of the band height
/// below its top edge, not centered on glyph metrics.
pub fn text_origin(band: Rect, offset_x: i32) -> (f32, f32) {
    (offset_x as f32, band.y.saturating_add(band.height / 4) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_rows_for_800x600() {
        for spot in TargetSpot::ALL {
            let rect = background_rect(800, 600, 24, spot, 10);
            assert_eq!(rect.x, 0);
            assert_eq!(rect.width, 800);
            assert_eq!(rect.height, 48);

            let expected_y = match spot.row() {
                Row::Top => 10,
                Row::Middle => 276,
                Row::Bottom => 542,
            };
            assert_eq!(rect.y, expected_y, "{spot}");
        }
    }

    #[test]
    fn band_examples() {
        assert_eq!(
            background_rect(800, 600, 24, TargetSpot::TopLeft, 10),
            Rect::new(0, 10, 800, 48)
        );
        assert_eq!(
            background_rect(800, 600, 24, TargetSpot::Center, 10),
            Rect::new(0, 276, 800, 48)
        );
        assert_eq!(
            background_rect(800, 600, 24, TargetSpot::BottomRight, 10),
            Rect::new(0, 542, 800, 48)
        );
    }

    #[test]
    fn middle_row_uses_integer_halves() {
        // 301 / 2 = 150, 50 / 2 = 25
        let rect = background_rect(100, 301, 25, TargetSpot::MiddleRight, 0);
        assert_eq!(rect.y, 125);
        assert_eq!(rect.height, 50);
    }

    #[test]
    fn middle_row_ignores_margin() {
        let a = background_rect(100, 200, 10, TargetSpot::Center, 0);
        let b = background_rect(100, 200, 10, TargetSpot::Center, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_band_is_not_clamped() {
        let rect = background_rect(50, 40, 30, TargetSpot::BottomLeft, 10);
        assert_eq!(rect, Rect::new(0, -30, 50, 60));

        let rect = background_rect(50, 40, 30, TargetSpot::TopLeft, 10);
        assert_eq!(rect.y + rect.height, 70);
    }

    #[test]
    fn text_offsets_for_800_wide() {
        for spot in TargetSpot::ALL {
            let expected = match spot.column() {
                Column::Left => 5,
                Column::Middle => 300,
                Column::Right => 595,
            };
            assert_eq!(text_offset(200.0, 800, spot), expected, "{spot}");
        }
    }

    #[test]
    fn fractional_width_truncates_before_halving() {
        // 800 - 199.5 = 600.5 -> 600 -> 300
        assert_eq!(text_offset(199.5, 800, TargetSpot::BottomMiddle), 300);
        // 800 - 200.5 = 599.5 -> 599 -> 299
        assert_eq!(text_offset(200.5, 800, TargetSpot::TopMiddle), 299);
        assert_eq!(text_offset(200.5, 800, TargetSpot::TopRight), 594);
    }

    #[test]
    fn overflowing_text_gets_negative_offset() {
        assert_eq!(text_offset(1000.0, 800, TargetSpot::Center), -100);
        assert_eq!(text_offset(1000.0, 800, TargetSpot::BottomRight), -205);
        assert_eq!(text_offset(1000.0, 800, TargetSpot::BottomLeft), 5);
    }

    #[test]
    fn origin_sits_a_quarter_into_the_band() {
        let band = background_rect(400, 300, 24, TargetSpot::BottomLeft, 10);
        assert_eq!(text_origin(band, 5), (5.0, 254.0));

        // 50 / 4 = 12
        let band = Rect::new(0, 100, 10, 50);
        assert_eq!(text_origin(band, 0), (0.0, 112.0));
    }

    #[test]
    fn extreme_margins_saturate() {
        let rect = background_rect(400, 300, 24, TargetSpot::BottomLeft, i32::MIN + 5);
        assert_eq!(rect.y, i32::MAX);
        assert_eq!(rect.height, 48);

        let rect = background_rect(400, 300, i32::MAX, TargetSpot::BottomRight, i32::MAX);
        assert_eq!(rect.y, i32::MIN);
        assert_eq!(rect.height, i32::MAX);

        // MIN / 2 - MAX / 2 still fits
        let rect = background_rect(400, i32::MIN, i32::MAX, TargetSpot::Center, 0);
        assert_eq!(rect.y, i32::MIN + 1);
    }

    #[test]
    fn huge_text_width_saturates() {
        assert_eq!(text_offset(3.0e9, 800, TargetSpot::BottomRight), i32::MIN);
        assert_eq!(text_offset(3.0e9, 800, TargetSpot::Center), i32::MIN / 2);
        assert_eq!(text_offset(3.0e9, 800, TargetSpot::TopLeft), TEXT_INSET);

        let band = Rect::new(0, i32::MAX - 1, 10, 40);
        assert_eq!(text_origin(band, 0).1, i32::MAX as f32);
    }

    #[test]
    fn zero_font_size_gives_empty_band() {
        let rect = background_rect(100, 100, 0, TargetSpot::TopLeft, 10);
        assert!(rect.is_empty());
    }
}
