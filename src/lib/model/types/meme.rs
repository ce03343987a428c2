//! Module implementing the `Meme` type.

use std::fmt;

use thiserror::Error;

use super::style::{Error as StyleError, Style};


/// Describes a meme: the two captions rendered over the image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Meme {
    /// Caption anchored to the top edge of the image.
    pub top: Style,
    /// Caption anchored to the bottom edge of the image.
    pub bottom: Style,
}

impl Meme {
    #[inline]
    pub fn new(top: Style, bottom: Style) -> Self {
        Meme{top, bottom}
    }

    /// Create a meme with given texts and default styles.
    #[inline]
    pub fn with_texts<T, B>(top: T, bottom: B) -> Self
        where T: Into<String>, B: Into<String>
    {
        Meme::new(Style::top().with_text(top), Style::bottom().with_text(bottom))
    }
}

impl Default for Meme {
    fn default() -> Self {
        Meme::new(Style::top(), Style::bottom())
    }
}

impl Meme {
    /// Whether the meme has any text at all.
    #[inline]
    pub fn has_text(&self) -> bool {
        self.top.has_text() || self.bottom.has_text()
    }

    /// Style of the caption at given side.
    #[inline]
    pub fn caption(&self, side: Side) -> &Style {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    /// Mutable style of the caption at given side.
    #[inline]
    pub fn caption_mut(&mut self, side: Side) -> &mut Style {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    /// Convert both caption texts to upper case.
    pub fn uppercased(self) -> Self {
        Meme::new(self.top.uppercased(), self.bottom.uppercased())
    }

    /// Check both captions against the bounds accepted from users.
    pub fn validate(&self) -> Result<(), MemeError> {
        for &side in Side::all() {
            self.caption(side).validate()
                .map_err(|error| MemeError{side, error})?;
        }
        Ok(())
    }
}


/// Which edge of the image a caption is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    #[inline]
    pub fn all() -> &'static [Side] {
        &[Side::Top, Side::Bottom]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Side::Top => write!(fmt, "top"),
            Side::Bottom => write!(fmt, "bottom"),
        }
    }
}


/// Error for when one of the captions of a `Meme` is invalid.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid {side} caption: {error}")]
pub struct MemeError {
    pub side: Side,
    #[source]
    pub error: StyleError,
}
