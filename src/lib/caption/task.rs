//! Module implementing the actual captioning task.
//! Most if not all captioning logic lives here.

use std::convert::TryFrom;
use std::fmt;

use image::{ColorType, DynamicImage, ImageEncoder, RgbImage};
use image::codecs::png::PngEncoder;

use crate::model::{Side, Style};
use crate::resources::{Font, Loader};
use super::engine;
use super::error::CaptionError;
use super::output::RenderedMeme;
use super::scale::Scaling;
use super::text;


/// Represents a single captioning task and contains all the relevant logic.
///
/// Rendering is synchronous and CPU-bound, and every task owns its image,
/// so tasks for the same engine may run concurrently on separate threads.
pub(super) struct MemeTask<'e, 's, Fl>
    where Fl: Loader<Item=Font>
{
    top: &'s Style,
    bottom: &'s Style,
    engine: &'e engine::Inner<Fl>,
}

impl<'e, 's, Fl> MemeTask<'e, 's, Fl>
    where Fl: Loader<Item=Font>, Fl::Err: fmt::Display
{
    #[inline]
    pub fn new(top: &'s Style, bottom: &'s Style, engine: &'e engine::Inner<Fl>) -> Self {
        MemeTask{top, bottom, engine}
    }

    /// Perform the captioning task on given source image.
    pub fn perform(self, source: DynamicImage) -> Result<RenderedMeme, CaptionError> {
        debug!("Rendering meme with top {:?} and bottom {:?}", self.top, self.bottom);

        let mut img = source.to_rgb8();
        let (width, height) = img.dimensions();
        let scaling = Scaling::for_dimensions(width, height);
        trace!("Source image size: {}x{}, scaling factors: {:?}", width, height, scaling);

        let top_y = scaling.y_offset(self.top.y_offset);
        self.draw_caption(&mut img, Side::Top, top_y, &scaling);

        // Bottom caption is anchored by the top of its line,
        // which sits one (scaled) font size above the vertical offset.
        let bottom_size = scaling.font_size(self.bottom.font_size);
        let bottom_y = i32::try_from(height).unwrap_or(i32::MAX)
            .saturating_sub(i32::try_from(bottom_size).unwrap_or(i32::MAX))
            .saturating_sub(scaling.y_offset(self.bottom.y_offset));
        self.draw_caption(&mut img, Side::Bottom, bottom_y, &scaling);

        let bytes = self.encode_result(&img)?;
        Ok(RenderedMeme::new(img, bytes))
    }

    /// Draws a single caption text at given vertical position.
    fn draw_caption(&self, img: &mut RgbImage, side: Side, y: i32, scaling: &Scaling) {
        let style = match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        };
        if !style.has_text() {
            debug!("Empty {} caption text, skipping.", side);
            return;
        }

        let font_size = scaling.font_size(style.font_size);
        let font = self.engine.resolver.resolve(style.font, font_size);
        text::check_glyphs(font.font(), &style.text);

        let x_offset = scaling.x_offset(style.x_offset);
        let image_width = img.width();
        debug!("Rendering {} text {:?} at y={} (x offset {}) with font {} at {}px",
            side, style.text, y, x_offset, font.font().name(), font.size());
        text::draw_text(img, &style.text, x_offset, y, &font, style.color, image_width);
    }

    /// Encode final result as PNG bytes.
    fn encode_result(&self, img: &RgbImage) -> Result<Vec<u8>, CaptionError> {
        let config = *self.engine.config.read();
        let (width, height) = img.dimensions();
        trace!("Writing {}x{} PNG image with {:?}", width, height, config);

        let mut result = vec![];
        PngEncoder::new_with_quality(&mut result, config.png_compression, config.png_filter)
            .write_image(img.as_raw(), width, height, ColorType::Rgb8)
            .map_err(CaptionError::Encode)?;
        debug!("Encoded final image into {} bytes", result.len());
        Ok(result)
    }
}
