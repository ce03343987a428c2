//! Module which defines the captioning engine.

mod builder;
mod config;

pub use self::builder::{Builder, Error as BuildError};
pub use self::config::Config;


use std::fmt;
use std::path::Path;
use std::sync::Arc;

use antidote::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{FontChoice, Meme, Style};
use crate::resources::{CachingLoader, Font, FontCatalog, FontLoader, FontResolver, Loader};
use crate::util::cache::ThreadSafeCache;
use super::error::CaptionError;
use super::output::RenderedMeme;
use super::source::{self, ImageSource};
use super::task::MemeTask;


/// Default directory to load font files from.
pub const DEFAULT_FONT_DIRECTORY: &str = "data/fonts";

const DEFAULT_FONT_CAPACITY: usize = 16;


/// Meme captioning engine.
///
/// The engine is thread-safe (`Sync`), so many memes can be rendered
/// in parallel while sharing the same font cache.
///
/// *Note*: `Engine` implements `Clone`
/// by merely cloning a shared reference to the underlying object.
pub struct Engine<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    inner: Arc<Inner<Fl>>,
}

/// Shared state of the engine that caption tasks have access to.
pub(super) struct Inner<Fl>
    where Fl: Loader<Item=Font>
{
    pub(super) config: RwLock<Config>,
    pub resolver: FontResolver<Fl>,
}

impl<Fl> Inner<Fl>
    where Fl: Loader<Item=Font>
{
    #[inline]
    pub fn new(config: Config, font_loader: CachingLoader<Fl>, catalog: FontCatalog) -> Self {
        let config = RwLock::new(config);
        Inner{config, resolver: FontResolver::new(font_loader, catalog)}
    }
}

impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    #[inline]
    pub(super) fn from_inner(inner: Inner<Fl>) -> Self {
        Engine{inner: Arc::new(inner)}
    }
}

// Constructors.
impl Engine<FontLoader> {
    /// Create an Engine which loads fonts from given directory path.
    ///
    /// When loaded, fonts will be cached in memory (LRU cache).
    ///
    /// For other ways of creating `Engine`, see the `EngineBuilder`.
    #[inline]
    pub fn new<D: AsRef<Path>>(font_directory: D) -> Self {
        Engine::with_loader(FontLoader::new(font_directory))
    }
}
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Create an Engine that uses given font loader.
    ///
    /// When loaded, fonts will be cached in memory (LRU cache).
    #[inline]
    pub fn with_loader(font_loader: Fl) -> Self {
        Engine::from_inner(Inner::new(
            Config::default(),
            CachingLoader::new(font_loader, DEFAULT_FONT_CAPACITY),
            FontCatalog::default()))
    }

    /// Create an Engine that uses given font loader directly.
    ///
    /// Any caching scheme, if necessary, should be implemented by the loader itself.
    #[inline]
    pub fn with_raw_loader(font_loader: Fl) -> Self {
        Engine::from_inner(Inner::new(
            Config::default(), CachingLoader::phony(font_loader), FontCatalog::default()))
    }
}

impl Default for Engine<FontLoader> {
    /// Create an Engine which loads fonts from the default directory.
    fn default() -> Self {
        Engine::new(DEFAULT_FONT_DIRECTORY)
    }
}

impl<Fl> Clone for Engine<Fl>
    where Fl: Loader<Item=Font>
{
    fn clone(&self) -> Self {
        Engine{inner: self.inner.clone()}
    }
}

impl<Fl> fmt::Debug for Engine<Fl>
    where Fl: Loader<Item=Font>
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Engine")
            .field("config", &*self.inner.config.read())
            .field("resolver", &self.inner.resolver)
            .finish()
    }
}


// Meme captioning.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>, Fl::Err: fmt::Display
{
    /// Render a meme by captioning the source image with the specified texts.
    ///
    /// Note that captioning is a CPU-intensive process and can be relatively lengthy
    /// for large images. It is recommended to execute it in a separate thread.
    pub fn caption(&self, source: ImageSource, meme: &Meme) -> Result<RenderedMeme, CaptionError> {
        let image = source.decode()?;
        MemeTask::new(&meme.top, &meme.bottom, &self.inner).perform(image)
    }

    /// Render a meme from image bytes of any supported format
    /// and the styles of its two captions.
    pub fn generate_meme(&self, image_bytes: &[u8],
                         top: &Style, bottom: &Style) -> Result<RenderedMeme, CaptionError> {
        let image = source::decode_image(image_bytes, None)?;
        MemeTask::new(top, bottom, &self.inner).perform(image)
    }
}

// Managing resources.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Preemptively load a font into engine's cache.
    pub fn preload_font(&self, choice: FontChoice) -> Result<(), Fl::Err> {
        let loader = self.inner.resolver.loader();
        if !loader.is_phony() {
            loader.load(self.inner.resolver.catalog().resource_name(choice))?;
        }
        Ok(())
    }

    /// Return a reference to the internal font cache, if any.
    /// This can be used to examine cache statistics (hits & misses).
    #[inline]
    pub fn font_cache(&self) -> Option<&ThreadSafeCache<String, Font>> {
        self.inner.resolver.loader().cache()
    }

    /// Mapping of font choices to font resources used by the engine.
    #[inline]
    pub fn font_catalog(&self) -> &FontCatalog {
        self.inner.resolver.catalog()
    }
}

// Configuration.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Read the `Engine`'s configuration.
    #[inline]
    pub fn config(&self) -> RwLockReadGuard<Config> {
        self.inner.config.read()
    }

    /// Modify the `Engine`'s configuration.
    ///
    /// Changes will affect both pending and future captioning tasks.
    #[inline]
    pub fn config_mut(&self) -> RwLockWriteGuard<Config> {
        self.inner.config.write()
    }
}


#[cfg(test)]
mod tests;
