//! Module defining the model types.

mod color;
mod font;
mod meme;
mod style;

pub use self::color::Color;
pub use self::font::FontChoice;
pub use self::meme::{Meme, MemeError, Side};
pub use self::style::{Style, Error as StyleError};
