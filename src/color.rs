use core::fmt;

use crate::math::Number;

/// An RGBA color with floating-point components (0.0–1.0 range).
///
/// Written as four space-separated numbers, e.g. `FontColor 1 0.8 0 1,`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from byte channels, scaling each by 1/255.
    /// ```
    /// use fdf_frames::color::Color;
    /// assert_eq!(Color::rgb(1.0, 1.0, 1.0), Color::u_rgb(0xFF, 0xFF, 0xFF));
    /// ```
    pub fn u_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::u_rgba(r, g, b, 0xFF)
    }
    /// Builds a color from byte channels, scaling each by 1/255.
    /// ```
    /// use fdf_frames::color::Color;
    /// assert_eq!(Color::rgba(0.0, 0.0, 0.0, 1.0), Color::u_rgba(0, 0, 0, 0xFF));
    /// ```
    pub fn u_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            Number(self.r),
            Number(self.g),
            Number(self.b),
            Number(self.a)
        )
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from(value: (f64, f64, f64)) -> Self {
        Self::rgb(value.0, value.1, value.2)
    }
}
impl From<(f64, f64, f64, f64)> for Color {
    fn from(value: (f64, f64, f64, f64)) -> Self {
        Self::rgba(value.0, value.1, value.2, value.3)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::u_rgb(value.0, value.1, value.2)
    }
}
impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Self::u_rgba(value.0, value.1, value.2, value.3)
    }
}

/// `0xRRGGBB`, fully opaque.
impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Color::u_rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_shortest_numbers() {
        assert_eq!(Color::WHITE.to_string(), "1 1 1 1");
        assert_eq!(Color::rgba(0.5, 0.25, 0.0, 1.0).to_string(), "0.5 0.25 0 1");
    }

    #[test]
    fn hex_matches_byte_channels() {
        assert_eq!(Color::from(0xFF8000u32), Color::u_rgb(0xFF, 0x80, 0x00));
        assert_eq!(Color::from(0x000000u32), Color::BLACK);
    }
}
