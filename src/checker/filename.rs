use std::path::Path;

use super::casing::{is_kebab_case, is_pascal_case_with_acronyms};
use super::violation::{RuleId, Violation};

/// Extension whose files may also use `PascalCase` names (React components).
const PASCAL_ALLOWED_EXTENSION: &str = "tsx";

/// Check a file's base name against the kebab-case policy.
///
/// Only the segment before the first dot is validated, so `user-card.test.ts`
/// is checked as `user-card`. A segment equal to `index` always passes.
#[must_use]
pub fn check_file_name(path: &Path) -> Option<Violation> {
    let stem = path.file_stem().map(|s| s.to_string_lossy())?;
    let main_name = stem.split('.').next().unwrap_or_default();

    if main_name == "index" {
        return None;
    }

    let pascal_allowed = path
        .extension()
        .is_some_and(|ext| ext == PASCAL_ALLOWED_EXTENSION);

    if is_kebab_case(main_name) || (pascal_allowed && is_pascal_case_with_acronyms(main_name)) {
        return None;
    }

    let expected = if pascal_allowed {
        "kebab-case or PascalCase"
    } else {
        "kebab-case"
    };
    Some(Violation::mismatch(
        path,
        1,
        RuleId::FileName,
        expected,
        main_name,
    ))
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
