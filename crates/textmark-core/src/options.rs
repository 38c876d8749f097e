//! How a watermark should look

use crate::{
    color::Color,
    error::{Result, WatermarkError},
    spot::TargetSpot,
};

/// Family used when the caller does not pick one
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Face selection and text decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

impl FontStyle {
    pub const REGULAR: Self = Self {
        bold: false,
        italic: false,
        underline: false,
        strikeout: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        ..Self::REGULAR
    };
    pub const ITALIC: Self = Self {
        italic: true,
        ..Self::REGULAR
    };
    pub const BOLD_ITALIC: Self = Self {
        bold: true,
        italic: true,
        ..Self::REGULAR
    };

    pub const fn with_underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }

    pub const fn with_strikeout(self) -> Self {
        Self {
            strikeout: true,
            ..self
        }
    }

    pub const fn has_decorations(&self) -> bool {
        self.underline || self.strikeout
    }
}

/// Painting settings for one draw context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderQuality {
    /// Antialias rectangles and other non-text shapes
    pub smoothing: bool,
    /// Antialias glyph geometry
    pub text_antialias: bool,
}

impl RenderQuality {
    pub const HIGH: Self = Self {
        smoothing: true,
        text_antialias: true,
    };
    pub const LEGACY: Self = Self {
        smoothing: false,
        text_antialias: true,
    };
}

impl Default for RenderQuality {
    fn default() -> Self {
        Self::HIGH
    }
}

/// Settings for [`crate::Watermarker::apply_text_watermark`]
///
/// Start from [`Default`] and change what you need, either directly or
/// through the configure callback the watermarker hands you.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkOptions {
    pub text_color: Color,
    /// Band behind the text; skipped while fully transparent
    pub background_color: Color,
    /// Stroke around the glyphs; skipped while fully transparent
    pub outline_color: Color,
    pub outline_width: f32,
    pub font_family: String,
    /// Pixel size; the band is twice as tall
    pub font_size: u32,
    pub font_style: FontStyle,
    pub spot: TargetSpot,
    pub margin: i32,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            text_color: Color::white(),
            background_color: Color::TRANSPARENT,
            outline_color: Color::TRANSPARENT,
            outline_width: 1.0,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: 24,
            font_style: FontStyle::REGULAR,
            spot: TargetSpot::BottomLeft,
            margin: 10,
        }
    }
}

impl WatermarkOptions {
    /// Defaults, then `configure` applied once
    pub fn configured(configure: impl FnOnce(&mut WatermarkOptions)) -> Self {
        let mut options = Self::default();
        configure(&mut options);
        options
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_font_size(self.font_size)?;
        if !self.outline_width.is_finite() || self.outline_width < 0.0 {
            return Err(WatermarkError::Config(format!(
                "outline width must be a non-negative number, got {}",
                self.outline_width
            )));
        }
        Ok(())
    }
}

/// Positional arguments of the deprecated fixed-signature entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyWatermark {
    /// `#AARRGGBB`
    pub color: String,
    /// `#AARRGGBB`; painted even when fully transparent
    pub bg_color: String,
    pub font_family: String,
    pub size: u32,
    pub spot: TargetSpot,
    pub style: FontStyle,
    pub margin: i32,
}

impl Default for LegacyWatermark {
    fn default() -> Self {
        Self {
            color: "#77FFFFFF".to_string(),
            bg_color: "#00000000".to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            size: 24,
            spot: TargetSpot::BottomLeft,
            style: FontStyle::REGULAR,
            margin: 10,
        }
    }
}

pub(crate) fn validate_font_size(size: u32) -> Result<()> {
    if size == 0 {
        return Err(WatermarkError::Config("font size must be positive".into()));
    }
    // The band is twice the size and must stay an i32
    if size > (i32::MAX / 2) as u32 {
        return Err(WatermarkError::Config(format!("font size {size} is too large")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = WatermarkOptions::default();
        assert_eq!(options.background_color.a, 0);
        assert_eq!(options.outline_color.a, 0);
        assert!(options.outline_width > 0.0);
        assert_eq!(options.font_size, 24);
        assert_eq!(options.font_style, FontStyle::REGULAR);
        assert_eq!(options.spot, TargetSpot::BottomLeft);
        assert_eq!(options.margin, 10);
        assert!(options.text_color.is_visible());
    }

    #[test]
    fn configured_applies_callback_to_fresh_defaults() {
        let options = WatermarkOptions::configured(|o| {
            o.spot = TargetSpot::TopRight;
            o.font_size = 12;
        });
        assert_eq!(options.spot, TargetSpot::TopRight);
        assert_eq!(options.font_size, 12);
        assert_eq!(options.margin, 10);

        // Nothing leaks into the next call
        assert_eq!(WatermarkOptions::configured(|_| {}), WatermarkOptions::default());
    }

    #[test]
    fn validation_rejects_bad_sizes() {
        let zero = WatermarkOptions::configured(|o| o.font_size = 0);
        assert!(matches!(zero.validate(), Err(WatermarkError::Config(_))));

        let negative = WatermarkOptions::configured(|o| o.outline_width = -1.0);
        assert!(negative.validate().is_err());

        let nan = WatermarkOptions::configured(|o| o.outline_width = f32::NAN);
        assert!(nan.validate().is_err());

        let hairline = WatermarkOptions::configured(|o| o.outline_width = 0.0);
        assert!(hairline.validate().is_ok());
    }

    #[test]
    fn legacy_defaults_match_signature() {
        let legacy = LegacyWatermark::default();
        assert_eq!(legacy.color, "#77FFFFFF");
        assert_eq!(legacy.bg_color, "#00000000");
        assert_eq!(legacy.font_family, "Arial");
        assert_eq!(legacy.size, 24);
        assert_eq!(legacy.spot, TargetSpot::BottomLeft);
        assert_eq!(legacy.style, FontStyle::REGULAR);
        assert_eq!(legacy.margin, 10);
    }

    #[test]
    fn style_helpers() {
        let style = FontStyle::BOLD.with_underline();
        assert!(style.bold && style.underline && !style.italic);
        assert!(style.has_decorations());
        assert!(!FontStyle::BOLD_ITALIC.has_decorations());
        assert!(FontStyle::ITALIC.with_strikeout().strikeout);
    }
}
