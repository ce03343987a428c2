//! Module responsible for rendering text.

use std::collections::BTreeSet;
use std::convert::TryFrom;

use image::RgbImage;
use imageproc::drawing::draw_text_mut;
use rusttype::point;

use crate::model::{Color, OUTLINE_COLOR};
use crate::resources::{Font, FontHandle};


/// How far (in pixels) the outline extends around the text.
pub const OUTLINE_RADIUS: i32 = 2;

/// Largest distance from the image origin that text is drawn at.
const POSITION_LIMIT: i32 = i32::MAX / 4;


/// Check if given font has all the glyphs for given text.
/// Returns the codepoints that are missing.
pub fn check_glyphs(font: &Font, text: &str) -> Vec<char> {
    let missing: BTreeSet<char> = text.chars()
        .filter(|&c| !c.is_control() && !font.has_glyph(c))
        .collect();
    if !missing.is_empty() {
        warn!("Missing glyphs in font `{}` for {} codepoint(s): {}",
            font.name(), missing.len(),
            missing.iter().map(|&c| format!("{:#x}", c as u32)).collect::<Vec<_>>().join(", "));
    }
    missing.into_iter().collect()
}


/// Compute the pixel width of the inked area of given text.
pub fn text_width(text: &str, font: &FontHandle) -> i32 {
    let mut extent: Option<(i32, i32)> = None;
    for glyph in font.font().layout(text, font.scale(), point(0.0, 0.0)) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            extent = Some(match extent {
                Some((min_x, max_x)) => (min_x.min(bbox.min.x), max_x.max(bbox.max.x)),
                None => (bbox.min.x, bbox.max.x),
            });
        }
    }
    extent.map(|(min_x, max_x)| max_x.saturating_sub(min_x)).unwrap_or(0)
}

/// Horizontal position of text that's centered within the image
/// and then shifted by given offset.
#[inline]
pub fn centered_x(image_width: u32, text_width: i32, x_offset: i32) -> i32 {
    let image_width = i32::try_from(image_width).unwrap_or(i32::MAX);
    (image_width.saturating_sub(text_width) / 2).saturating_add(x_offset)
}

/// Clamp a text position so that drawing glyphs relative to it cannot overflow.
/// Anything past the limit is far outside of the image and gets clipped anyway.
#[inline]
fn clamp_position(pos: i32) -> i32 {
    pos.max(-POSITION_LIMIT).min(POSITION_LIMIT)
}


/// Draws outlined, horizontally centered text onto given image.
///
/// `y` is the top of the text line.
/// Parts of the text that fall outside of the image are clipped.
pub fn draw_text(image: &mut RgbImage, text: &str,
                 x_offset: i32, y: i32,
                 font: &FontHandle, color: Color, image_width: u32) {
    if text.is_empty() {
        return;
    }

    let width = text_width(text, font);
    let x = clamp_position(centered_x(image_width, width, x_offset));
    let y = clamp_position(y);
    trace!("Drawing {:?} ({}px wide) at ({}, {}) with {:?}", text, width, x, y, font);

    let scale = font.scale();
    let outline = OUTLINE_COLOR.to_rgb();
    for dx in -OUTLINE_RADIUS..=OUTLINE_RADIUS {
        for dy in -OUTLINE_RADIUS..=OUTLINE_RADIUS {
            draw_text_mut(image, outline, x + dx, y + dy, scale, font.font(), text);
        }
    }
    draw_text_mut(image, color.to_rgb(), x, y, scale, font.font(), text);
}
