use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{NamingGuardError, Result};

/// Extensions of the script, module and typed-script files that get checked.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// File name infixes marking machine-generated files.
pub const GENERATED_MARKERS: &[&str] = &[".generated.", ".gen."];

pub trait FileFilter {
    /// Decide whether a file, given relative to the scan root, is checked.
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts source files that are not generated and not matched by an exclude glob.
pub struct SourceFilter {
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    /// Create a filter with additional exclude globs.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| NamingGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| NamingGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    fn has_source_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
    }

    fn is_generated(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| GENERATED_MARKERS.iter().any(|m| name.contains(m)))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        Self::has_source_extension(path) && !Self::is_generated(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
