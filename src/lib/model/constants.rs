//! Module defining constants relevant to the data model.

use super::types::{Color, FontChoice};


/// Default text of the top caption.
pub const DEFAULT_TOP_TEXT: &str = "TOP TEXT";
/// Default text of the bottom caption.
pub const DEFAULT_BOTTOM_TEXT: &str = "BOTTOM TEXT";

/// Default font of the top caption.
pub const DEFAULT_TOP_FONT: FontChoice = FontChoice::Impact;
/// Default font of the bottom caption.
pub const DEFAULT_BOTTOM_FONT: FontChoice = FontChoice::Arial;

/// Default color of the text.
pub const DEFAULT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Color of the text outline.
pub const OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);

/// Default font size, in points relative to a 600px wide image.
pub const DEFAULT_FONT_SIZE: u32 = 40;
/// Default horizontal offset of a caption.
pub const DEFAULT_X_OFFSET: i32 = 0;
/// Default vertical offset of a caption.
pub const DEFAULT_Y_OFFSET: i32 = 10;


/// Smallest font size accepted from the user.
pub const MIN_FONT_SIZE: u32 = 20;
/// Largest font size accepted from the user.
pub const MAX_FONT_SIZE: u32 = 100;

/// Largest (absolute) horizontal offset accepted from the user.
pub const MAX_X_OFFSET: i32 = 300;
/// Smallest vertical offset accepted from the user.
pub const MIN_Y_OFFSET: i32 = 0;
/// Largest vertical offset accepted from the user.
pub const MAX_Y_OFFSET: i32 = 300;

/// Maximum length (in Unicode codepoints) of a single caption text.
pub const MAX_CAPTION_LENGTH: usize = 256;
