//! File reading for the loader.
//!
//! ```
//! use init_env::fs::{ReadFile, SystemFs};
//! use std::path::Path;
//!
//! fn read_config<F: ReadFile>(fs: &F, path: &Path) -> String {
//!     fs.read_to_string(path)
//!         .unwrap_or_else(|_| "{}".to_string())
//! }
//!
//! let config = read_config(&SystemFs, Path::new("/nonexistent/config.json"));
//! assert_eq!(config, "{}");
//! ```

use std::io;
use std::path::Path;

#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::path::PathBuf;

pub trait ReadFile {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<F: ReadFile + ?Sized> ReadFile for &F {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// Zero-sized type that delegates to `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl ReadFile for SystemFs {
    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory files keyed by path.
///
/// # Path Semantics
///
/// Paths are stored as raw [`PathBuf`] keys with **no normalization**.
/// `"config.json"` and `"./config.json"` are two distinct entries.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: HashMap<PathBuf, String>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// A store holding a single file.
    pub fn with_file(path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let mut fs = Self::new();
        fs.insert(path, content);
        fs
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadFile for MemFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }
}
