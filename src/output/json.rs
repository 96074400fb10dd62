use std::path::PathBuf;

use serde::Serialize;

use crate::checker::{Disposition, RuleId, ScanReport, Violation};
use crate::error::Result;

use super::{OutputFormatter, Rendered, display_path};

pub struct JsonFormatter {
    root: PathBuf,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: &'static str,
    files_scanned: usize,
    violation_count: usize,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    file: String,
    line: usize,
    rule: RuleId,
    message: &'a str,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn convert<'a>(&self, violation: &'a Violation) -> JsonViolation<'a> {
        JsonViolation {
            file: display_path(&violation.file, &self.root),
            line: violation.line,
            rule: violation.rule,
            message: &violation.message,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport, disposition: Disposition) -> Result<Rendered> {
        let output = JsonOutput {
            status: disposition.as_str(),
            files_scanned: report.files_scanned,
            violation_count: report.violations.len(),
            violations: report.violations.iter().map(|v| self.convert(v)).collect(),
        };

        let mut stdout = serde_json::to_string_pretty(&output)?;
        stdout.push('\n');

        Ok(Rendered {
            stdout,
            stderr: String::new(),
        })
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
