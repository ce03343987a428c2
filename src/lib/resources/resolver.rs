//! Module for resolving font choices into fonts ready for rendering.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rusttype::Scale;

use crate::model::FontChoice;
use super::{CachingLoader, Loader};
use super::fonts::Font;


/// Mapping of available font choices to names of font resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontCatalog {
    resources: HashMap<FontChoice, String>,
}

impl FontCatalog {
    /// Set the resource name used for given font choice.
    #[inline]
    pub fn set<R: Into<String>>(&mut self, choice: FontChoice, resource: R) -> &mut Self {
        self.resources.insert(choice, resource.into());
        self
    }

    /// Name of the font resource to load for given font choice.
    pub fn resource_name(&self, choice: FontChoice) -> &str {
        self.resources.get(&choice).map(|r| r.as_str())
            .unwrap_or_else(|| choice.resource_name())
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        FontCatalog{
            resources: hashmap!{
                FontChoice::Impact => FontChoice::Impact.resource_name().to_owned(),
                FontChoice::Arial => FontChoice::Arial.resource_name().to_owned(),
                FontChoice::ComicSans => FontChoice::ComicSans.resource_name().to_owned(),
            },
        }
    }
}


/// Font at a specific pixel size, ready for drawing text.
#[derive(Clone)]
pub struct FontHandle {
    font: Arc<Font>,
    size: u32,
    choice: FontChoice,
    fallback: bool,
}

impl FontHandle {
    #[inline]
    pub fn new(font: Arc<Font>, size: u32, choice: FontChoice) -> Self {
        FontHandle{font, size: size.max(1), choice, fallback: false}
    }

    /// Handle to the built-in font, used when the requested one is unavailable.
    #[inline]
    pub fn fallback(size: u32, choice: FontChoice) -> Self {
        FontHandle{fallback: true, ..Self::new(Font::builtin(), size, choice)}
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Pixel size of the font.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size as f32)
    }

    /// Font choice that this handle has been resolved for.
    #[inline]
    pub fn choice(&self) -> FontChoice {
        self.choice
    }

    /// Whether the built-in font was substituted for the requested one.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("FontHandle")
            .field("font", &self.font.name())
            .field("size", &self.size)
            .field("choice", &self.choice)
            .field("fallback", &self.fallback)
            .finish()
    }
}


/// Resolves font choices into loaded fonts,
/// substituting the built-in font for any that cannot be loaded.
pub struct FontResolver<Fl: Loader<Item=Font>> {
    loader: CachingLoader<Fl>,
    catalog: FontCatalog,
}

impl<Fl: Loader<Item=Font>> FontResolver<Fl> {
    #[inline]
    pub fn new(loader: CachingLoader<Fl>, catalog: FontCatalog) -> Self {
        FontResolver{loader, catalog}
    }

    #[inline]
    pub fn loader(&self) -> &CachingLoader<Fl> {
        &self.loader
    }

    #[inline]
    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }
}

impl<Fl> FontResolver<Fl>
    where Fl: Loader<Item=Font>, Fl::Err: fmt::Display
{
    /// Resolve the font choice into a font of given pixel size.
    ///
    /// This never fails: if the font cannot be loaded, the built-in one is used.
    pub fn resolve(&self, choice: FontChoice, pixel_size: u32) -> FontHandle {
        match self.try_resolve(choice, pixel_size) {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Cannot load font {} (`{}`), falling back to the built-in one: {}",
                    choice, self.catalog.resource_name(choice), e);
                FontHandle::fallback(pixel_size, choice)
            }
        }
    }

    /// Try to load the font for given choice, without any fallback.
    pub fn try_resolve(&self, choice: FontChoice, pixel_size: u32) -> Result<FontHandle, Fl::Err> {
        let resource = self.catalog.resource_name(choice);
        trace!("Loading font `{}` for {} at size {}", resource, choice, pixel_size);
        let font = self.loader.load(resource)?;
        Ok(FontHandle::new(font, pixel_size, choice))
    }
}

impl<Fl: Loader<Item=Font>> fmt::Debug for FontResolver<Fl> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("FontResolver")
            .field("loader", &self.loader)
            .field("catalog", &self.catalog)
            .finish()
    }
}
