pub mod casing;
mod exports;
mod filename;
mod result;
mod violation;

pub use exports::{ExportChecker, ExportRule, line_for_offset};
pub use filename::check_file_name;
pub use result::{Disposition, ScanReport};
pub use violation::{RuleId, Violation};
