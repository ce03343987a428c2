//!
//! memeify  -- Top text, bottom text
//!

#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate maplit;
#[macro_use] extern crate serde_derive;


#[cfg(test)] #[macro_use] extern crate serde_json;
#[cfg(test)] #[macro_use] extern crate spectral;


mod caption;
mod model;
mod resources;
mod util;


pub use crate::caption::*;
pub use crate::model::*;
pub use crate::resources::*;
pub use crate::util::cache::*;
