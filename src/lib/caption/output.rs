//! Defines the output of a captioning operation.

use std::ops::Deref;

use image::RgbImage;
use mime::{self, Mime};


/// Suggested file name for a downloaded meme.
pub const DOWNLOAD_FILE_NAME: &str = "custom_meme.png";


/// Output of the captioning process: the final image and its PNG encoding.
#[derive(Clone, Debug)]
#[must_use = "unused caption output which must be used"]
pub struct RenderedMeme {
    image: RgbImage,
    bytes: Vec<u8>,
}

impl RenderedMeme {
    #[inline]
    pub(super) fn new(image: RgbImage, bytes: Vec<u8>) -> Self {
        RenderedMeme{image, bytes}
    }
}

impl RenderedMeme {
    /// The captioned image.
    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Width and height of the image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Raw bytes of the PNG-encoded image.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of PNG bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The MIME type of the encoded bytes.
    #[inline]
    pub fn mime_type(&self) -> Mime {
        mime::IMAGE_PNG
    }

    #[inline]
    pub fn file_name(&self) -> &'static str {
        DOWNLOAD_FILE_NAME
    }
}

impl Deref for RenderedMeme {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<RenderedMeme> for Vec<u8> {
    fn from(output: RenderedMeme) -> Self {
        output.into_bytes()
    }
}
