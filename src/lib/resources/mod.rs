//! Module handling the resources used for captioning.

mod filesystem;
mod fonts;
mod resolver;


pub use self::filesystem::{BytesLoader, PathLoader};
pub use self::fonts::{Font, FontError, FontLoader,
                      BUILTIN_FONT_LICENSE, BUILTIN_FONT_NAME, FILE_EXTENSION as FONT_FILE_EXTENSION};
pub use self::resolver::{FontCatalog, FontHandle, FontResolver};


use std::fmt;
use std::sync::Arc;

use crate::util::cache::ThreadSafeCache;


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource of given name.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err>;
}


/// A loader that keeps a cache of resources previously loaded.
pub struct CachingLoader<L: Loader> {
    inner: L,
    cache: ThreadSafeCache<String, L::Item>,
    phony: bool,
}

impl<L: Loader> CachingLoader<L> {
    #[inline]
    pub fn new(inner: L, capacity: usize) -> Self {
        CachingLoader{
            inner,
            cache: ThreadSafeCache::new(capacity),
            phony: false,
        }
    }

    /// Create a phony version of CachingLoader that doesn't actually cache anything.
    ///
    /// This is used to transparently wrap a `Loader<Item=T>` into `Loader<Item=Arc<T>>`,
    /// so that the rest of the code doesn't have to care.
    #[inline]
    pub fn phony(inner: L) -> Self {
        CachingLoader{
            inner,
            cache: ThreadSafeCache::new(0),
            phony: true,
        }
    }
}

impl<L: Loader> CachingLoader<L> {
    /// The cache of loaded resources, unless this is a phony loader.
    #[inline]
    pub fn cache(&self) -> Option<&ThreadSafeCache<String, L::Item>> {
        if self.phony { None } else { Some(&self.cache) }
    }

    /// Whether this loader doesn't actually cache anything.
    #[inline]
    pub fn is_phony(&self) -> bool {
        self.phony
    }
}

impl<L: Loader> Loader for CachingLoader<L> {
    type Item = Arc<L::Item>;
    type Err = L::Err;

    /// Load the object from cache or fall back on the original Loader.
    /// Cache the objects loaded this way.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        if self.phony {
            return self.inner.load(name).map(Arc::new);
        }
        if let Some(obj) = self.cache.get(name) {
            trace!("Cache hit for resource `{}`", name);
            return Ok(obj);
        }
        let obj = self.inner.load(name)?;
        Ok(self.cache.put(name.to_owned(), obj))
    }
}

impl<L: Loader> fmt::Debug for CachingLoader<L> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("CachingLoader")
            .field("inner", &"...")
            .field("cache", &self.cache)
            .field("phony", &self.phony)
            .finish()
    }
}
