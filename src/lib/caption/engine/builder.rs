//! Module implementing the builder for `Engine`.

use std::fmt;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType};
use thiserror::Error;

use crate::model::FontChoice;
use crate::resources::{CachingLoader, Font, FontCatalog, FontLoader, Loader};
use super::config::Config;
use super::{Engine, Inner, DEFAULT_FONT_CAPACITY};


/// Builder for `Engine`.
#[must_use = "unused builder which must be used"]
pub struct Builder<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    errors: Vec<Error>,
    font_loader_builder: Option<LoaderBuilder<Fl>>,
    catalog: FontCatalog,
    png_compression: Option<CompressionType>,
    png_filter: Option<FilterType>,
}


/// Temporary configuration for the font loader.
/// Used by `Builder`.
enum LoaderBuilder<L: Loader> {
    Cached {
        inner: Option<(L, LoaderOrigin)>,
        cache_size: usize,
    },
    Raw { inner: Option<L> },
}

/// How the loader wrapped by `LoaderBuilder::Cached` has been provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoaderOrigin {
    Directory,
    Custom,
}

impl<L: Loader> LoaderBuilder<L> {
    #[inline]
    fn cached(size: usize) -> Self {
        LoaderBuilder::Cached { inner: None, cache_size: size }
    }

    #[inline]
    fn raw() -> Self {
        LoaderBuilder::Raw { inner: None }
    }
}

impl<L: Loader> LoaderBuilder<L> {
    /// Set the loader that the `Cached` loader would wrap.
    /// Returns `false` if `LoaderBuilder` is already configured incompatibly.
    fn set_cached_loader(&mut self, loader: L, origin: LoaderOrigin) -> bool {
        if let LoaderBuilder::Cached{ref mut inner, ..} = *self {
            if inner.as_ref().map(|&(_, o)| o == origin).unwrap_or(true) {
                *inner = Some((loader, origin));
                return true;
            }
        }
        false
    }

    /// Set the cache size of `Cached` loader.
    /// Returns `false` if `LoaderBuilder` is already configured incompatibly.
    fn set_cached_size(&mut self, size: usize) -> bool {
        if let LoaderBuilder::Cached{ref mut cache_size, ..} = *self {
            *cache_size = size;
            return true;
        }
        false
    }

    /// Set the loader that the `Raw` loader would wrap.
    /// Returns `false` if `LoaderBuilder` is already configured incompatibly.
    fn set_raw_loader(&mut self, loader: L) -> bool {
        if let LoaderBuilder::Raw{ref mut inner} = *self {
            *inner = Some(loader);
            return true;
        }
        false
    }

    /// Build the `Loader`.
    fn build(self) -> Result<CachingLoader<L>, Error> {
        match self {
            LoaderBuilder::Cached{ inner, cache_size } => inner
                .map(|(loader, _)| CachingLoader::new(loader, cache_size))
                .ok_or(Error::NoLoader),
            // Use the phony version of CachingLoader which doesn't actually cache anything,
            // but provides the same interface yielding Arc<L::Item>.
            LoaderBuilder::Raw{ inner } => inner
                .map(CachingLoader::phony)
                .ok_or(Error::NoLoader),
        }
    }
}


impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}
impl<Fl> Default for Builder<Fl>
    where Fl: Loader<Item=Font>
{
    fn default() -> Self {
        Builder{
            errors: vec![],
            font_loader_builder: None,
            catalog: FontCatalog::default(),
            png_compression: None,
            png_filter: None,
        }
    }
}

// Setters.
impl Builder<FontLoader> {
    /// Set the directory where the fonts will be loaded from.
    #[inline]
    pub fn font_directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        let ok = self.font_loader_builder
            .get_or_insert_with(|| LoaderBuilder::cached(DEFAULT_FONT_CAPACITY))
            .set_cached_loader(FontLoader::new(directory), LoaderOrigin::Directory);
        if ok { self } else { self.err(Error::LoaderBuilderConflict) }
    }
}
impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Set a custom loader for fonts.
    ///
    /// Fonts loaded by it will still be cached in an LRU cache.
    /// See `raw_font_loader` if you want to provide your own caching.
    #[inline]
    pub fn font_loader(mut self, loader: Fl) -> Self {
        let ok = self.font_loader_builder
            .get_or_insert_with(|| LoaderBuilder::cached(DEFAULT_FONT_CAPACITY))
            .set_cached_loader(loader, LoaderOrigin::Custom);
        if ok { self } else { self.err(Error::LoaderBuilderConflict) }
    }

    /// Change the size of the font cache.
    #[inline]
    pub fn font_cache_size(mut self, size: usize) -> Self {
        let ok = self.font_loader_builder
            .get_or_insert_with(|| LoaderBuilder::cached(DEFAULT_FONT_CAPACITY))
            .set_cached_size(size);
        if ok { self } else { self.err(Error::LoaderBuilderConflict) }
    }

    /// Set a custom "raw" loader for fonts.
    ///
    /// Fonts loaded this way will not be cached (unless the loader itself
    /// implements some kind of caching).
    #[inline]
    pub fn raw_font_loader(mut self, loader: Fl) -> Self {
        let ok = self.font_loader_builder
            .get_or_insert_with(LoaderBuilder::raw)
            .set_raw_loader(loader);
        if ok { self } else { self.err(Error::LoaderBuilderConflict) }
    }

    /// Load given font choice from a resource other than the standard one.
    #[inline]
    pub fn font_file<R: Into<String>>(mut self, choice: FontChoice, resource: R) -> Self {
        self.catalog.set(choice, resource); self
    }
}
impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Set the compression level of PNG images generated by the `Engine`.
    #[inline]
    pub fn png_compression(mut self, compression: CompressionType) -> Self {
        self.png_compression = Some(compression); self
    }

    /// Set the scanline filter of PNG images generated by the `Engine`.
    #[inline]
    pub fn png_filter(mut self, filter: FilterType) -> Self {
        self.png_filter = Some(filter); self
    }
}

// Validation & building.
impl<Fl> Builder<Fl>
    where Fl: Loader<Item=Font>
{
    /// Build the `Engine`.
    pub fn build(self) -> Result<Engine<Fl>, Error> {
        if let Some(error) = self.errors.first() {
            return Err(error.clone());
        }

        let config = self.build_config();
        let font_loader = self.font_loader_builder
            .ok_or(Error::NoLoader)?
            .build()?;
        Ok(Engine::from_inner(Inner::new(config, font_loader, self.catalog)))
    }

    #[doc(hidden)]
    fn build_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(compression) = self.png_compression {
            config.png_compression = compression;
        }
        if let Some(filter) = self.png_filter {
            config.png_filter = filter;
        }
        config
    }

    #[doc(hidden)]
    fn err(mut self, error: Error) -> Self {
        self.errors.push(error); self
    }
}

impl<Fl> fmt::Debug for Builder<Fl>
    where Fl: Loader<Item=Font>
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let loader = self.font_loader_builder.as_ref().map(|lb| match *lb {
            LoaderBuilder::Cached{ref inner, cache_size} =>
                format!("Cached({:?}, {})", inner.as_ref().map(|&(_, o)| o), cache_size),
            LoaderBuilder::Raw{ref inner} =>
                format!("Raw({})", if inner.is_some() { "..." } else { "None" }),
        });
        fmt.debug_struct("Builder")
            .field("errors", &self.errors)
            .field("font_loader", &loader)
            .field("catalog", &self.catalog)
            .field("png_compression", &self.png_compression)
            .field("png_filter", &self.png_filter)
            .finish()
    }
}


/// Error that resulted from misconfiguration of the `Engine` via its `Builder`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No font loader set up.
    #[error("no font loader configured")]
    NoLoader,
    /// Font loader configuration setup error.
    #[error("invalid combination of configuration parameters for setting up the font loader")]
    LoaderBuilderConflict,
}
