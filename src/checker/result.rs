use crate::config::EnforcementMode;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS};

use super::Violation;

/// Outcome of one scan: every violation in discovery order plus the file count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
}

/// Final verdict of a run, derived from the report and the enforcement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Pass,
    Warn,
    Fail,
}

impl Disposition {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pass | Self::Warn => EXIT_SUCCESS,
            Self::Fail => EXIT_VIOLATIONS,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

impl ScanReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Found {} naming violation(s) in {} files",
            self.violations.len(),
            self.files_scanned
        )
    }

    #[must_use]
    pub fn disposition(&self, mode: EnforcementMode) -> Disposition {
        if self.is_clean() {
            return Disposition::Pass;
        }
        match mode {
            EnforcementMode::Warn => Disposition::Warn,
            EnforcementMode::Block => Disposition::Fail,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
