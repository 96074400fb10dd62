mod filter;

pub use filter::{FileFilter, GENERATED_MARKERS, SOURCE_EXTENSIONS, SourceFilter};

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{NamingGuardError, Result};

/// Directory names that are never descended into, at any depth below the root.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "coverage",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".cache",
    "vendor",
    "out",
    "target",
    ".turbo",
];

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root is missing, is not a directory, or any
    /// directory below it cannot be listed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Depth-first, pre-order walker; siblings are visited in byte order of their names.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Library callers may pass an unresolved root, so it is validated here too.
    fn check_root(root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|source| NamingGuardError::RootNotFound {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(NamingGuardError::NotADirectory(root.to_path_buf()));
        }
        Ok(())
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.filter.should_include(relative)
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Self::check_root(root)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded_dir(e))
        {
            let entry = entry.map_err(|source| NamingGuardError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;

            if entry.file_type().is_file() && self.accepts(root, entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
