//! Module defining the source image of a meme.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use image::{self, DynamicImage, ImageFormat};
use mime::{self, Mime};

use super::error::CaptionError;


/// Source image to put the captions on: encoded JPEG or PNG bytes.
#[derive(Clone)]
pub struct ImageSource {
    bytes: Vec<u8>,
    mime: Option<Mime>,
}

impl ImageSource {
    /// Create the source from raw image bytes.
    /// Their format will be detected automatically.
    #[inline]
    pub fn new<B: Into<Vec<u8>>>(bytes: B) -> Self {
        ImageSource{bytes: bytes.into(), mime: None}
    }

    /// Declare the MIME type of the image bytes.
    #[inline]
    pub fn with_mime(mut self, mime: Mime) -> Self {
        self.mime = Some(mime); self
    }

    /// Read the source from a file.
    ///
    /// The MIME type is declared based on the file extension, if it's a known one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!("Read {} bytes of source image from {}", bytes.len(), path.display());

        let source = ImageSource::new(bytes);
        Ok(match path.extension().and_then(|e| e.to_str()).and_then(mime_for_extension) {
            Some(mime) => source.with_mime(mime),
            None => source,
        })
    }
}

impl ImageSource {
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared MIME type of the image, if any.
    #[inline]
    pub fn mime(&self) -> Option<&Mime> {
        self.mime.as_ref()
    }

    /// Decode the source into an image.
    pub fn decode(&self) -> Result<DynamicImage, CaptionError> {
        decode_image(&self.bytes, self.mime.as_ref())
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("ImageSource")
            .field("bytes", &format!("<{} bytes>", self.bytes.len()))
            .field("mime", &self.mime)
            .finish()
    }
}


/// Decode image bytes, honoring their declared MIME type if given.
pub(super) fn decode_image(bytes: &[u8], mime: Option<&Mime>) -> Result<DynamicImage, CaptionError> {
    let result = match mime {
        Some(mime) => {
            let format = image_format(mime)
                .ok_or_else(|| CaptionError::UnsupportedType(mime.clone()))?;
            trace!("Decoding source image as {:?} (declared {})", format, mime);
            image::load_from_memory_with_format(bytes, format)
        }
        None => {
            trace!("Decoding source image of unspecified format");
            image::load_from_memory(bytes)
        }
    };
    result.map_err(|e| {
        debug!("Failed to decode source image of {} bytes: {}", bytes.len(), e);
        CaptionError::Decode(e)
    })
}

/// Image format corresponding to given MIME type, if it's supported.
fn image_format(mime: &Mime) -> Option<ImageFormat> {
    if mime.type_() != mime::IMAGE {
        return None;
    }
    match mime.subtype().as_str() {
        "png" => Some(ImageFormat::Png),
        "jpeg" | "jpg" | "pjpeg" => Some(ImageFormat::Jpeg),
        _ => None,
    }
}

fn mime_for_extension(extension: &str) -> Option<Mime> {
    match extension.to_lowercase().as_str() {
        "png" => Some(mime::IMAGE_PNG),
        "jpg" | "jpeg" => Some(mime::IMAGE_JPEG),
        _ => None,
    }
}
