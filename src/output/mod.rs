mod json;
mod path;
mod text;

pub use json::JsonFormatter;
pub use path::display_path;
pub use text::TextFormatter;

use crate::checker::{Disposition, ScanReport};
use crate::error::Result;

/// Rendered report, split by the stream each part belongs on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for formatting scan reports into various output formats.
pub trait OutputFormatter {
    /// Format the scan report for the given disposition.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &ScanReport, disposition: Disposition) -> Result<Rendered>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
