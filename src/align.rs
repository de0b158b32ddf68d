use core::fmt;
use core::str::FromStr;

use crate::errors::Error;

/// Named anchor on a frame's rectangle, used by `SetPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum FramePoint {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl FramePoint {
    pub const ALL: [FramePoint; 9] = [
        FramePoint::TopLeft,
        FramePoint::Top,
        FramePoint::TopRight,
        FramePoint::Left,
        FramePoint::Center,
        FramePoint::Right,
        FramePoint::BottomLeft,
        FramePoint::Bottom,
        FramePoint::BottomRight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FramePoint::TopLeft => "TOPLEFT",
            FramePoint::Top => "TOP",
            FramePoint::TopRight => "TOPRIGHT",
            FramePoint::Left => "LEFT",
            FramePoint::Center => "CENTER",
            FramePoint::Right => "RIGHT",
            FramePoint::BottomLeft => "BOTTOMLEFT",
            FramePoint::Bottom => "BOTTOM",
            FramePoint::BottomRight => "BOTTOMRIGHT",
        }
    }
}

impl fmt::Display for FramePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FramePoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FramePoint::ALL
            .into_iter()
            .find(|point| point.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPoint(s.to_string()))
    }
}

/// Text justification. Horizontal and vertical values share one token space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum FontJustify {
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    JustifyTop,
    JustifyMiddle,
    JustifyBottom,
}

impl FontJustify {
    pub const ALL: [FontJustify; 6] = [
        FontJustify::JustifyLeft,
        FontJustify::JustifyCenter,
        FontJustify::JustifyRight,
        FontJustify::JustifyTop,
        FontJustify::JustifyMiddle,
        FontJustify::JustifyBottom,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FontJustify::JustifyLeft => "JUSTIFYLEFT",
            FontJustify::JustifyCenter => "JUSTIFYCENTER",
            FontJustify::JustifyRight => "JUSTIFYRIGHT",
            FontJustify::JustifyTop => "JUSTIFYTOP",
            FontJustify::JustifyMiddle => "JUSTIFYMIDDLE",
            FontJustify::JustifyBottom => "JUSTIFYBOTTOM",
        }
    }
}

impl fmt::Display for FontJustify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontJustify {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontJustify::ALL
            .into_iter()
            .find(|justify| justify.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownJustify(s.to_string()))
    }
}
