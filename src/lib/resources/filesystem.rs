//! Module defining loaders of file-based resources.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::Loader;


/// Loader for file paths from given directory.
///
/// A resource named `foo` is any file `foo.*` in the directory
/// which also satisfies the loader's predicate (typically an extension check).
/// No actual reading is performed here, only path resolution.
#[derive(Clone)]
pub struct PathLoader {
    directory: PathBuf,
    predicate: Arc<dyn Fn(&Path) -> bool + Send + Sync>,
}

impl PathLoader {
    /// Create a loader which gives out paths to files with any extension.
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        Self::with_predicate(directory, |_| true)
    }

    /// Create a loader which only gives out paths to files
    /// that have the extension given (compared case-insensitively).
    pub fn for_extension<D: AsRef<Path>>(directory: D, extension: &str) -> Self {
        let extension = extension.trim().to_lowercase();
        Self::with_predicate(directory, move |path| {
            path.extension().and_then(|e| e.to_str())
                .map(|e| e.trim().to_lowercase() == extension)
                .unwrap_or(false)
        })
    }

    pub fn with_predicate<D, P>(directory: D, predicate: P) -> Self
        where D: AsRef<Path>, P: Fn(&Path) -> bool + Send + Sync + 'static
    {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            predicate: Arc::new(predicate),
        }
    }

    /// Directory that the resources are loaded from.
    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Loader for PathLoader {
    type Item = PathBuf;
    type Err = io::Error;

    /// "Load" a path "resource" from the loader's directory.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        // Both the directory and the name are taken literally.
        let directory = glob::Pattern::escape(&self.directory.to_string_lossy());
        let pattern = Path::new(&directory)
            .join(format!("{}.*", glob::Pattern::escape(name)));
        let pattern = pattern.to_string_lossy();
        trace!("Globbing with {}", pattern);

        let glob_iter = glob::glob(&pattern).map_err(|e| {
            error!("Failed to glob over files with {}: {}", pattern, e);
            io::Error::new(io::ErrorKind::InvalidInput, e)
        })?;
        let mut matches = vec![];
        for entry in glob_iter {
            match entry {
                Ok(path) => if (self.predicate)(&path) { matches.push(path) },
                Err(e) => warn!("Skipping unreadable path while loading `{}`: {}", name, e),
            }
        }

        match matches.len() {
            0 => Err(io::Error::new(io::ErrorKind::NotFound,
                format!("resource `{}` not found in {}", name, self.directory.display()))),
            1 => Ok(matches.remove(0)),
            c => Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("ambiguous resource name `{}` matching {} files in {}",
                    name, c, self.directory.display()))),
        }
    }
}

impl fmt::Debug for PathLoader {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathLoader")
            .field("directory", &self.directory)
            .finish()
    }
}


/// Loader that reads the entire content of files found by a `PathLoader`.
#[derive(Clone, Debug)]
pub struct BytesLoader {
    inner: PathLoader,
}

impl BytesLoader {
    #[inline]
    pub fn new(inner: PathLoader) -> Self {
        BytesLoader{inner}
    }

    #[inline]
    pub fn path_loader(&self) -> &PathLoader {
        &self.inner
    }
}

impl From<PathLoader> for BytesLoader {
    fn from(input: PathLoader) -> Self {
        Self::new(input)
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    /// Load a file resource as its byte content.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        let path = self.inner.load(name)?;
        let file = File::open(&path)?;

        let mut bytes = match file.metadata() {
            Ok(stat) => Vec::with_capacity(stat.len() as usize),
            Err(e) => {
                warn!("Failed to stat file of resource `{}` to obtain its size: {}",
                    name, e);
                Vec::new()
            },
        };
        BufReader::new(file).read_to_end(&mut bytes)?;
        debug!("Read {} bytes of resource `{}` from {}", bytes.len(), name, path.display());
        Ok(bytes)
    }
}
