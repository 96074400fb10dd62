//! Casing policies shared by the file name and export rules.
//!
//! Each policy is a pure predicate over ASCII identifiers. Any non-ASCII
//! character makes a name fail every policy.

/// Lowercase alphanumeric groups joined by single hyphens (`user-profile`, `v2`).
#[must_use]
pub fn is_kebab_case(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|group| {
            !group.is_empty()
                && group
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Lowercase first letter followed by letters or digits (`fetchUser`).
#[must_use]
pub fn is_camel_case(value: &str) -> bool {
    let mut bytes = value.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_lowercase())
        && bytes.all(|b| b.is_ascii_alphanumeric())
}

/// Uppercase alphanumeric groups joined by single underscores (`MAX_RETRIES`).
///
/// The first character must be a letter, so `_PRIVATE` and `2FA` are rejected.
#[must_use]
pub fn is_upper_snake_case(value: &str) -> bool {
    value.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
        && value.split('_').all(|group| {
            !group.is_empty()
                && group
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        })
}

/// One or more groups of an uppercase run followed by lowercase letters or digits.
///
/// Accepts ordinary `PascalCase` as well as acronym runs such as `HTTPClient`
/// or `URL`.
#[must_use]
pub fn is_pascal_case_with_acronyms(value: &str) -> bool {
    let mut bytes = value.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_uppercase())
        && bytes.all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
#[path = "casing_tests.rs"]
mod tests;
