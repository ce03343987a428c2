//! Module defining the data model.

mod constants;
mod de;
mod types;

pub use self::constants::*;
pub use self::de::{ColorParseError, FontChoiceParseError};
pub use self::types::*;
