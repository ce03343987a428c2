//! Module with captioning engine configuration.

use image::codecs::png::{CompressionType, FilterType};


/// Structure holding configuration for the `Engine`.
///
/// This is shared with `MemeTask`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Compression level of the generated PNG images.
    pub png_compression: CompressionType,
    /// Filter applied to scanlines of the generated PNG images.
    pub png_filter: FilterType,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config {
            png_compression: CompressionType::Default,
            png_filter: FilterType::Adaptive,
        }
    }
}
