//! Module for loading fonts used to caption memes.

use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use super::Loader;
use super::filesystem::{BytesLoader, PathLoader};


pub const FILE_EXTENSION: &str = "ttf";

/// Name of the font that's built into the library.
pub const BUILTIN_FONT_NAME: &str = "DejaVu Sans";

/// License of the built-in font,
/// to be distributed along with any binary that embeds it.
pub const BUILTIN_FONT_LICENSE: &str = include_str!("LICENSE-DejaVu.txt");

const BUILTIN_FONT_DATA: &[u8] = include_bytes!("DejaVuSans.ttf");

lazy_static! {
    static ref BUILTIN_FONT: Arc<Font> = Arc::new(
        Font::from_bytes(BUILTIN_FONT_NAME, BUILTIN_FONT_DATA.to_vec())
            .expect("embedded font data is a valid TrueType font"));
}


/// Font that can be used to caption memes.
#[derive(Clone)]
pub struct Font {
    name: String,
    inner: rusttype::Font<'static>,
}

impl Font {
    /// Parse the font from raw bytes of a TrueType file.
    pub fn from_bytes<N: Into<String>>(name: N, bytes: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        let inner = rusttype::Font::try_from_vec(bytes)
            .ok_or_else(|| FontError::Invalid(name.clone()))?;
        Ok(Font{name, inner})
    }

    /// The font that's embedded into the library, always available.
    #[inline]
    pub fn builtin() -> Arc<Font> {
        BUILTIN_FONT.clone()
    }

    /// Name of the resource this font was loaded from.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the font has a glyph for given character.
    #[inline]
    pub fn has_glyph(&self, c: char) -> bool {
        self.inner.glyph(c).id() != rusttype::GlyphId(0)
    }
}

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({:?})", self.name)
    }
}


/// Error that may occur while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font file: {0}")]
    Io(#[from] io::Error),
    #[error("file for font `{0}` is not a valid TrueType font")]
    Invalid(String),
}


/// Loader of fonts from TrueType files in a directory.
#[derive(Clone, Debug)]
pub struct FontLoader {
    inner: BytesLoader,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::new(
                PathLoader::for_extension(directory, FILE_EXTENSION))
        }
    }

    /// Directory the fonts are loaded from.
    #[inline]
    pub fn directory(&self) -> &Path {
        self.inner.path_loader().directory()
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load(&self, name: &str) -> Result<Font, Self::Err> {
        let bytes = self.inner.load(name).map_err(|e| {
            debug!("Failed to read file for `{}` font resource: {}", name, e);
            e
        })?;
        let font = Font::from_bytes(name, bytes).map_err(|e| {
            error!("Failed to parse `{}` font resource: {}", name, e);
            e
        })?;
        debug!("Font `{}` loaded successfully ({} glyphs)", name, font.glyph_count());
        Ok(font)
    }
}


#[cfg(test)]
mod tests {
    use std::fs;

    use spectral::prelude::*;

    use crate::resources::Loader;
    use super::{Font, FontError, FontLoader, BUILTIN_FONT_LICENSE};

    const BOLD_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/fonts/DejaVuSans-Bold.ttf");

    #[test]
    fn builtin_font() {
        let font = Font::builtin();
        assert_eq!("DejaVu Sans", font.name());
        assert!(font.has_glyph('A'));
        assert!(!font.has_glyph('\u{10FFFD}'));
    }

    #[test]
    fn builtin_font_license() {
        assert_that!(BUILTIN_FONT_LICENSE).contains("DejaVu");
        assert_that!(BUILTIN_FONT_LICENSE).contains("Bitstream Vera");
    }

    #[test]
    fn load_font_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::copy(BOLD_FONT, dir.path().join("impact.ttf")).unwrap();

        let loader = FontLoader::new(dir.path());
        let font = loader.load("impact").unwrap();
        assert_eq!("impact", font.name());
        assert!(font.has_glyph('M'));
    }

    #[test]
    fn missing_font() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FontLoader::new(dir.path());
        match loader.load("arial") {
            Err(FontError::Io(_)) => {},
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn corrupt_font() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("comic.ttf"), b"definitely not a font").unwrap();
        let loader = FontLoader::new(dir.path());
        assert_that!(loader.load("comic")).is_err();
    }

    #[test]
    fn other_extensions_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::copy(BOLD_FONT, dir.path().join("impact.otf")).unwrap();
        let loader = FontLoader::new(dir.path());
        assert_that!(loader.load("impact")).is_err();
    }
}
