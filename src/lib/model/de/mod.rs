//! Deserializers for data model types.

mod color;
mod font;
mod meme;



pub use self::color::ColorParseError;
pub use self::font::FontChoiceParseError;
