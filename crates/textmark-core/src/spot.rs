//! The nine anchor positions a watermark band can take

use std::fmt;
use std::str::FromStr;

use crate::error::WatermarkError;

/// Where on the image the watermark band goes
///
/// The row picks the band's vertical position, the column picks how the
/// text is aligned inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TargetSpot {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    #[default]
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

/// Vertical group of a [`TargetSpot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

/// Horizontal group of a [`TargetSpot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Middle,
    Right,
}

impl TargetSpot {
    /// All spots, row by row from the top-left corner
    pub const ALL: [TargetSpot; 9] = [
        TargetSpot::TopLeft,
        TargetSpot::TopMiddle,
        TargetSpot::TopRight,
        TargetSpot::MiddleLeft,
        TargetSpot::Center,
        TargetSpot::MiddleRight,
        TargetSpot::BottomLeft,
        TargetSpot::BottomMiddle,
        TargetSpot::BottomRight,
    ];

    pub const fn row(self) -> Row {
        match self {
            TargetSpot::TopLeft | TargetSpot::TopMiddle | TargetSpot::TopRight => Row::Top,
            TargetSpot::MiddleLeft | TargetSpot::Center | TargetSpot::MiddleRight => Row::Middle,
            TargetSpot::BottomLeft | TargetSpot::BottomMiddle | TargetSpot::BottomRight => {
                Row::Bottom
            },
        }
    }

    pub const fn column(self) -> Column {
        match self {
            TargetSpot::TopMiddle | TargetSpot::Center | TargetSpot::BottomMiddle => {
                Column::Middle
            },
            TargetSpot::TopRight | TargetSpot::MiddleRight | TargetSpot::BottomRight => {
                Column::Right
            },
            TargetSpot::TopLeft | TargetSpot::MiddleLeft | TargetSpot::BottomLeft => Column::Left,
        }
    }

    /// Kebab-case name, also accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            TargetSpot::TopLeft => "top-left",
            TargetSpot::TopMiddle => "top-middle",
            TargetSpot::TopRight => "top-right",
            TargetSpot::MiddleLeft => "middle-left",
            TargetSpot::Center => "center",
            TargetSpot::MiddleRight => "middle-right",
            TargetSpot::BottomLeft => "bottom-left",
            TargetSpot::BottomMiddle => "bottom-middle",
            TargetSpot::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for TargetSpot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetSpot {
    type Err = WatermarkError;

    /// Accepts `bottom-left`, `bottom_left` and `BottomLeft`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        TargetSpot::ALL
            .into_iter()
            .find(|spot| spot.name().replace('-', "") == key)
            .ok_or_else(|| WatermarkError::Config(format!("unknown target spot: {s:?}")))
    }
}
