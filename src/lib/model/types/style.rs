//! Module implementing the `Style` type.

use std::fmt;

use thiserror::Error;

use crate::model::constants::{DEFAULT_BOTTOM_FONT, DEFAULT_BOTTOM_TEXT, DEFAULT_COLOR,
                              DEFAULT_FONT_SIZE, DEFAULT_TOP_FONT, DEFAULT_TOP_TEXT,
                              DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET,
                              MAX_CAPTION_LENGTH, MAX_FONT_SIZE, MAX_X_OFFSET, MAX_Y_OFFSET,
                              MIN_FONT_SIZE, MIN_Y_OFFSET};
use super::color::Color;
use super::font::FontChoice;


/// Describes a single caption of the meme and how it's supposed to look.
///
/// Sizes and offsets are expressed relative to a 600x600 reference image
/// and get scaled to the actual image dimensions during rendering.
///
/// Use `Style::top` or `Style::bottom` to start from the defaults.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text to render.
    ///
    /// It is rendered verbatim, so any case normalization
    /// (memes are traditionally ALL CAPS) is up to the caller.
    pub text: String,
    /// Font size in points.
    pub font_size: u32,
    /// Color of the text fill. The outline is always black.
    pub color: Color,
    /// Font to render the text with.
    pub font: FontChoice,
    /// Horizontal shift from the centered position.
    pub x_offset: i32,
    /// Vertical distance from the image edge the caption is anchored to.
    pub y_offset: i32,
}

impl Style {
    /// Default style of the top caption.
    pub fn top() -> Self {
        Style{
            text: DEFAULT_TOP_TEXT.into(),
            font: DEFAULT_TOP_FONT,
            ..Style::base()
        }
    }

    /// Default style of the bottom caption.
    pub fn bottom() -> Self {
        Style{
            text: DEFAULT_BOTTOM_TEXT.into(),
            font: DEFAULT_BOTTOM_FONT,
            ..Style::base()
        }
    }

    #[inline]
    fn base() -> Self {
        Style{
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_COLOR,
            font: DEFAULT_TOP_FONT,
            x_offset: DEFAULT_X_OFFSET,
            y_offset: DEFAULT_Y_OFFSET,
        }
    }
}

impl Style {
    /// Whether there is anything to render.
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Replace the text of the caption.
    #[inline]
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into(); self
    }

    /// Convert the caption text to upper case.
    #[inline]
    pub fn uppercased(mut self) -> Self {
        self.text = self.text.to_uppercase(); self
    }

    /// Check whether the parameters are within the bounds accepted from users.
    ///
    /// Rendering itself doesn't require this and copes with any values.
    pub fn validate(&self) -> Result<(), Error> {
        let length = self.text.chars().count();
        if length > MAX_CAPTION_LENGTH {
            return Err(Error::TooLong(length));
        }
        if self.font_size < MIN_FONT_SIZE || self.font_size > MAX_FONT_SIZE {
            return Err(Error::FontSize(self.font_size));
        }
        if self.x_offset.abs() > MAX_X_OFFSET {
            return Err(Error::XOffset(self.x_offset));
        }
        if self.y_offset < MIN_Y_OFFSET || self.y_offset > MAX_Y_OFFSET {
            return Err(Error::YOffset(self.y_offset));
        }
        Ok(())
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{{{font:?}@{size} {color} ({x:+},{y:+})}}({text:?})",
            text = self.text,
            font = self.font.name(),
            size = self.font_size,
            color = self.color,
            x = self.x_offset,
            y = self.y_offset)
    }
}


/// Error for when a `Style` has parameters outside of the accepted bounds.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Caption text too long.
    #[error("caption text too long: {0} > {max}", max = MAX_CAPTION_LENGTH)]
    TooLong(usize),
    /// Font size outside of the allowed range.
    #[error("font size {0} outside of {min}..={max}", min = MIN_FONT_SIZE, max = MAX_FONT_SIZE)]
    FontSize(u32),
    /// Horizontal offset outside of the allowed range.
    #[error("horizontal offset {0} outside of -{max}..={max}", max = MAX_X_OFFSET)]
    XOffset(i32),
    /// Vertical offset outside of the allowed range.
    #[error("vertical offset {0} outside of {min}..={max}", min = MIN_Y_OFFSET, max = MAX_Y_OFFSET)]
    YOffset(i32),
}
