use std::fs;
use std::io::Write;
use std::path::Path;

use crate::checker::{ExportChecker, ScanReport, check_file_name};
use crate::config::ScanConfig;
use crate::error::{NamingGuardError, Result};
use crate::output::{
    JsonFormatter, OutputFormat, OutputFormatter, Rendered, TextFormatter, display_path,
};
use crate::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use crate::EXIT_ERROR;

#[must_use]
pub fn run_check(config: &ScanConfig) -> i32 {
    match run_check_impl(config) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Scan, print the report and return the exit code.
///
/// # Errors
/// Returns an error if scanning fails or the report cannot be written.
pub fn run_check_impl(config: &ScanConfig) -> Result<i32> {
    let report = scan(config)?;
    let disposition = report.disposition(config.mode);

    let root = config.root.clone();
    let rendered = match config.format {
        OutputFormat::Text => TextFormatter::new(root).format(&report, disposition)?,
        OutputFormat::Json => JsonFormatter::new(root).format(&report, disposition)?,
    };
    write_rendered(&rendered)?;

    Ok(disposition.exit_code())
}

/// Walk the tree once and run the file name and export rules on every file.
///
/// Per file the file name check runs first, then the export checks, so the
/// report is in discovery order.
///
/// # Errors
/// Returns an error if the root cannot be walked or a file cannot be read.
pub fn scan(config: &ScanConfig) -> Result<ScanReport> {
    let filter = SourceFilter::new(&config.exclude)?;
    let files = DirectoryScanner::new(filter).scan(&config.root)?;
    let exports = ExportChecker::new();

    let mut report = ScanReport::default();
    for path in &files {
        if config.verbose > 0 {
            eprintln!("scanning {}", display_path(path, &config.root));
        }
        let before = report.violations.len();

        report.violations.extend(check_file_name(path));
        let content = read_source(path)?;
        report.violations.extend(exports.check(path, &content));

        if config.verbose > 1 {
            eprintln!("  {} violation(s)", report.violations.len() - before);
        }
    }
    report.files_scanned = files.len();

    Ok(report)
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| NamingGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_rendered(rendered: &Rendered) -> Result<()> {
    if !rendered.stdout.is_empty() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.stdout.as_bytes())?;
        stdout.flush()?;
    }
    if !rendered.stderr.is_empty() {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(rendered.stderr.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
