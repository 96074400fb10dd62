use std::path::Path;

use regex::Regex;

use super::casing::{is_camel_case, is_pascal_case_with_acronyms, is_upper_snake_case};
use super::violation::{RuleId, Violation};

const IDENT: &str = r"([A-Za-z_][A-Za-z0-9_]*)";

/// One exported-symbol rule: how to find declarations and how to judge their names.
pub struct ExportRule {
    pub id: RuleId,
    pub pattern: Regex,
    pub policy: fn(&str) -> bool,
    pub expected: &'static str,
}

impl ExportRule {
    fn new(id: RuleId, prefix: &str, policy: fn(&str) -> bool, expected: &'static str) -> Self {
        Self {
            id,
            // ASCII word boundary: a non-ASCII letter before `export` does not block the match
            pattern: Regex::new(&format!(r"(?-u:\b)export\s+{prefix}{IDENT}"))
                .expect("Invalid regex"),
            policy,
            expected,
        }
    }
}

fn is_camel_or_upper_snake(name: &str) -> bool {
    is_camel_case(name) || is_upper_snake_case(name)
}

/// Textual scanner for exported declarations.
///
/// Matching is purely pattern based: declarations inside comments or string
/// literals are reported like real ones.
pub struct ExportChecker {
    rules: Vec<ExportRule>,
}

impl Default for ExportChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportChecker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                ExportRule::new(
                    RuleId::ExportFunction,
                    r"(?:default\s+)?(?:async\s+)?function\s+",
                    is_camel_case,
                    "camelCase",
                ),
                ExportRule::new(
                    RuleId::ExportVariable,
                    r"(?:const|let|var)\s+",
                    is_camel_or_upper_snake,
                    "camelCase or UPPER_SNAKE_CASE",
                ),
                ExportRule::new(
                    RuleId::ExportClass,
                    r"(?:default\s+)?class\s+",
                    is_pascal_case_with_acronyms,
                    "PascalCase",
                ),
                ExportRule::new(
                    RuleId::ExportInterface,
                    r"interface\s+",
                    is_pascal_case_with_acronyms,
                    "PascalCase",
                ),
                ExportRule::new(
                    RuleId::ExportType,
                    r"type\s+",
                    is_pascal_case_with_acronyms,
                    "PascalCase",
                ),
                ExportRule::new(
                    RuleId::ExportEnum,
                    r"enum\s+",
                    is_pascal_case_with_acronyms,
                    "PascalCase",
                ),
            ],
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[ExportRule] {
        &self.rules
    }

    /// Check every exported declaration in `content`.
    ///
    /// Violations are grouped by rule in table order, then by position.
    #[must_use]
    pub fn check(&self, path: &Path, content: &str) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            for caps in rule.pattern.captures_iter(content) {
                let Some(name) = caps.get(1).map(|m| m.as_str()) else {
                    continue;
                };
                if (rule.policy)(name) {
                    continue;
                }

                let start = caps.get(0).map_or(0, |m| m.start());
                violations.push(Violation::mismatch(
                    path,
                    line_for_offset(content, start),
                    rule.id,
                    rule.expected,
                    name,
                ));
            }
        }

        violations
    }
}

/// 1-based line number of a byte offset.
#[must_use]
pub fn line_for_offset(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset.min(content.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

#[cfg(test)]
#[path = "exports_tests.rs"]
mod tests;
