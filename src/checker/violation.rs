use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Identifier of the policy a violation was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    FileName,
    ExportFunction,
    ExportVariable,
    ExportClass,
    ExportInterface,
    ExportType,
    ExportEnum,
}

impl RuleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileName => "file-name",
            Self::ExportFunction => "export-function",
            Self::ExportVariable => "export-variable",
            Self::ExportClass => "export-class",
            Self::ExportInterface => "export-interface",
            Self::ExportType => "export-type",
            Self::ExportEnum => "export-enum",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single naming violation.
///
/// `line` is 1-based. File name violations always report line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub file: PathBuf,
    pub line: usize,
    pub rule: RuleId,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(file: &Path, line: usize, rule: RuleId, message: String) -> Self {
        Self {
            file: file.to_path_buf(),
            line,
            rule,
            message,
        }
    }

    /// Builds the standard `expected <form>, got '<actual>'` message.
    #[must_use]
    pub fn mismatch(file: &Path, line: usize, rule: RuleId, expected: &str, actual: &str) -> Self {
        Self::new(file, line, rule, format!("expected {expected}, got '{actual}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_strings_match_display() {
        let all = [
            RuleId::FileName,
            RuleId::ExportFunction,
            RuleId::ExportVariable,
            RuleId::ExportClass,
            RuleId::ExportInterface,
            RuleId::ExportType,
            RuleId::ExportEnum,
        ];
        for rule in all {
            assert_eq!(rule.to_string(), rule.as_str());
        }
        assert_eq!(RuleId::FileName.as_str(), "file-name");
        assert_eq!(RuleId::ExportInterface.as_str(), "export-interface");
    }

    #[test]
    fn rule_id_serializes_as_kebab_case() {
        let json = serde_json::to_string(&RuleId::ExportVariable).unwrap();
        assert_eq!(json, "\"export-variable\"");
    }

    #[test]
    fn mismatch_builds_expected_message() {
        let v = Violation::mismatch(
            Path::new("src/a.ts"),
            3,
            RuleId::ExportFunction,
            "camelCase",
            "Bad_Name",
        );
        assert_eq!(v.line, 3);
        assert_eq!(v.message, "expected camelCase, got 'Bad_Name'");
    }
}
