//! Captioning error.

use image::ImageError;
use mime::Mime;
use thiserror::Error;


/// Error that may occur during the captioning.
///
/// Note that problems with fonts are never reported here,
/// as captions are then rendered with the built-in font.
#[derive(Debug, Error)]
pub enum CaptionError {
    /// The source image couldn't be decoded.
    #[error("cannot decode the source image: {0}")]
    Decode(#[source] ImageError),
    /// The declared type of source image isn't one of the supported formats.
    #[error("unsupported type of the source image: {0}")]
    UnsupportedType(Mime),
    #[error("failed to encode the final image: {0}")]
    Encode(#[source] ImageError),
}

impl CaptionError {
    /// Whether the error is due to a malformed or unsupported source image.
    #[inline]
    pub fn is_decode(&self) -> bool {
        match self {
            CaptionError::Decode(_) | CaptionError::UnsupportedType(_) => true,
            CaptionError::Encode(_) => false,
        }
    }
}
