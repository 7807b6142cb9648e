mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

pub trait FileScanner {
    /// Collect candidate files under `root`, in sorted order.
    ///
    /// # Errors
    /// Returns an error if the scan fails.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
