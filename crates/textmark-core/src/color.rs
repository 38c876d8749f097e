//! RGBA colors and the legacy `#AARRGGBB` parser

use crate::error::ColorFormatError;

/// Simple straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }

    /// Alpha of zero means the element carrying this color is not drawn at all
    pub const fn is_visible(&self) -> bool {
        self.a > 0
    }

    /// Decodes the legacy `#AARRGGBB` notation.
    ///
    /// Each channel is read from its fixed two-character slice after the
    /// leading marker, which itself is not inspected. Characters past the
    /// blue slice are ignored. There is no trimming and no `0x` form; a slice
    /// that is missing or not hexadecimal fails with the channel it belongs to.
    ///
    /// ```
    /// use textmark_core::Color;
    ///
    /// let c = Color::from_argb_hex("#FF112233")?;
    /// assert_eq!(c, Color::argb(0xFF, 0x11, 0x22, 0x33));
    /// # Ok::<(), textmark_core::error::ColorFormatError>(())
    /// ```
    pub fn from_argb_hex(input: &str) -> Result<Self, ColorFormatError> {
        let a = hex_channel(input, 1, "alpha")?;
        let r = hex_channel(input, 3, "red")?;
        let g = hex_channel(input, 5, "green")?;
        let b = hex_channel(input, 7, "blue")?;
        Ok(Self::argb(a, r, g, b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

fn hex_channel(input: &str, start: usize, channel: &'static str) -> Result<u8, ColorFormatError> {
    let invalid = || ColorFormatError::InvalidChannel {
        channel,
        input: input.to_string(),
    };

    let slice = input.get(start..start + 2).ok_or_else(invalid)?;
    // from_str_radix would accept a leading '+'
    if !slice.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(slice, 16).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_channel_from_its_slice() {
        let c = Color::from_argb_hex("#FF112233").unwrap();
        assert_eq!(c.a, 255);
        assert_eq!(c.r, 0x11);
        assert_eq!(c.g, 0x22);
        assert_eq!(c.b, 0x33);
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        assert_eq!(
            Color::from_argb_hex("#77ffFFfF").unwrap(),
            Color::argb(0x77, 0xFF, 0xFF, 0xFF)
        );
    }

    #[test]
    fn legacy_defaults_decode() {
        assert_eq!(
            Color::from_argb_hex("#77FFFFFF").unwrap(),
            Color::argb(0x77, 255, 255, 255)
        );
        assert_eq!(Color::from_argb_hex("#00000000").unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn non_hex_characters_fail() {
        let err = Color::from_argb_hex("#FF11ZZ33").unwrap_err();
        assert_eq!(
            err,
            ColorFormatError::InvalidChannel {
                channel: "green",
                input: "#FF11ZZ33".to_string(),
            }
        );
    }

    #[test]
    fn short_input_fails_on_missing_slice() {
        let err = Color::from_argb_hex("#FF1122").unwrap_err();
        assert!(matches!(
            err,
            ColorFormatError::InvalidChannel { channel: "blue", .. }
        ));
        assert!(Color::from_argb_hex("").is_err());
    }

    #[test]
    fn sign_is_not_a_hex_digit() {
        assert!(Color::from_argb_hex("#+F112233").is_err());
    }

    #[test]
    fn no_normalization_is_applied() {
        assert!(Color::from_argb_hex(" #FF112233").is_err());
        assert!(Color::from_argb_hex("0xFF112233").is_err());
    }

    #[test]
    fn marker_and_trailing_characters_are_not_checked() {
        assert_eq!(
            Color::from_argb_hex("xFF112233").unwrap(),
            Color::argb(0xFF, 0x11, 0x22, 0x33)
        );
        assert_eq!(
            Color::from_argb_hex("#FF11223344").unwrap(),
            Color::argb(0xFF, 0x11, 0x22, 0x33)
        );
    }

    #[test]
    fn zero_alpha_is_invisible() {
        assert!(!Color::TRANSPARENT.is_visible());
        assert!(Color::rgba(0, 0, 0, 1).is_visible());
    }
}
