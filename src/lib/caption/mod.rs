//! Module implementing meme captioning.

mod engine;
mod error;
mod output;
mod scale;
mod source;
mod task;
mod text;


pub use self::engine::{Builder as EngineBuilder,
                       BuildError as EngineBuildError,
                       Config as EngineConfig,
                       Engine,
                       DEFAULT_FONT_DIRECTORY};
pub use self::error::CaptionError;
pub use self::output::{RenderedMeme, DOWNLOAD_FILE_NAME};
pub use self::scale::{Scaling, REFERENCE_SIZE};
pub use self::source::ImageSource;
pub use self::text::{centered_x, check_glyphs, draw_text, text_width, OUTLINE_RADIUS};
