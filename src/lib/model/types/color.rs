//! Module implementing the `Color` type.

use std::fmt;

use image::Rgb;


/// RGB color of the caption text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Create a white color.
    #[inline]
    pub fn white() -> Self {
        Self::gray(0xff)
    }

    /// Create a black color.
    #[inline]
    pub fn black() -> Self {
        Self::gray(0x0)
    }

    /// Create a gray color of given intensity.
    #[inline]
    pub fn gray(value: u8) -> Self {
        Color(value, value, value)
    }
}

impl Color {
    #[inline]
    pub(crate) fn to_rgb(self) -> Rgb<u8> {
        let Color(r, g, b) = self;
        Rgb([r, g, b])
    }
}

impl From<Color> for Rgb<u8> {
    #[inline]
    fn from(color: Color) -> Rgb<u8> {
        color.to_rgb()
    }
}

impl From<(u8, u8, u8)> for Color {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}", r, g, b)
    }
}


#[cfg(test)]
mod tests {
    use image::Rgb;
    use super::Color;

    #[test]
    fn display_is_css_hex() {
        assert_eq!("#ffffff", Color::white().to_string());
        assert_eq!("#000000", Color::black().to_string());
        assert_eq!("#0a80ff", Color(10, 128, 255).to_string());
    }

    #[test]
    fn into_rgb() {
        let rgb: Rgb<u8> = Color(1, 2, 3).into();
        assert_eq!(Rgb([1, 2, 3]), rgb);
    }
}
