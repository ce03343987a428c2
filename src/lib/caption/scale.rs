//! Scaling of caption parameters to the actual image size.


/// Size of the reference image that font sizes and offsets are expressed in.
pub const REFERENCE_SIZE: f64 = 600.0;


/// Factors for converting caption parameters into pixels of a particular image.
///
/// Font sizes and horizontal offsets scale with image width,
/// vertical offsets with image height.
/// All scaled values are truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaling {
    pub x: f64,
    pub y: f64,
}

impl Scaling {
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Scaling{
            x: width as f64 / REFERENCE_SIZE,
            y: height as f64 / REFERENCE_SIZE,
        }
    }

    /// Pixel size of the font. Never smaller than 1.
    #[inline]
    pub fn font_size(&self, size: u32) -> u32 {
        ((size as f64 * self.x) as u32).max(1)
    }

    #[inline]
    pub fn x_offset(&self, offset: i32) -> i32 {
        (offset as f64 * self.x) as i32
    }

    #[inline]
    pub fn y_offset(&self, offset: i32) -> i32 {
        (offset as f64 * self.y) as i32
    }
}
