//! Path display utilities for consistent output formatting.
//!
//! Violation paths are shown relative to the scan root with forward-slash
//! separators on every platform.

use std::path::Path;

/// Format a path for display, relative to the scan root if possible.
///
/// - If `path` is under `root`, returns the relative path.
/// - Otherwise returns the path as-is.
/// - An empty relative path (the root itself) falls back to the full path.
#[must_use]
pub fn display_path(path: &Path, root: &Path) -> String {
    let relative = path
        .strip_prefix(root)
        .ok()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path);

    normalize_separators(&relative.to_string_lossy())
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
