use std::fmt::Write;
use std::path::PathBuf;

use crate::checker::{Disposition, ScanReport, Violation};
use crate::error::Result;

use super::{OutputFormatter, Rendered, display_path};

/// Plain line-oriented report.
///
/// Violations go to stdout as `<path>:<line> [<rule>] <message>`. The closing
/// `FAIL:` line is the only part written to stderr.
pub struct TextFormatter {
    root: PathBuf,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn format_violation(&self, violation: &Violation) -> String {
        format!(
            "{}:{} [{}] {}",
            display_path(&violation.file, &self.root),
            violation.line,
            violation.rule,
            violation.message
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport, disposition: Disposition) -> Result<Rendered> {
        let mut rendered = Rendered::default();

        if disposition == Disposition::Pass {
            writeln!(
                rendered.stdout,
                "PASS: naming validation passed ({} files scanned)",
                report.files_scanned
            )
            .ok();
            return Ok(rendered);
        }

        for violation in &report.violations {
            writeln!(rendered.stdout, "{}", self.format_violation(violation)).ok();
        }

        let summary = report.summary();
        match disposition {
            Disposition::Warn => writeln!(rendered.stdout, "WARN: {summary}").ok(),
            _ => writeln!(rendered.stderr, "FAIL: {summary}").ok(),
        };

        Ok(rendered)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
