//! Module defining the fixed set of fonts a caption can use.

use std::fmt;


/// One of the fonts that captions can be rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontChoice {
    /// The classic image macro font.
    Impact,
    Arial,
    ComicSans,
}

const ALL: &[FontChoice] = &[FontChoice::Impact, FontChoice::Arial, FontChoice::ComicSans];

impl FontChoice {
    /// All the available font choices, in the order they are presented to the user.
    #[inline]
    pub fn all() -> &'static [FontChoice] {
        ALL
    }

    /// Human readable name of the font.
    pub fn name(self) -> &'static str {
        match self {
            FontChoice::Impact => "Impact",
            FontChoice::Arial => "Arial",
            FontChoice::ComicSans => "Comic Sans",
        }
    }

    /// Name of the font resource (file stem) that this choice maps to by default.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontChoice::Impact => "impact",
            FontChoice::Arial => "arial",
            FontChoice::ComicSans => "comic",
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}
