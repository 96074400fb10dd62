use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "naming-guard")]
#[command(author, version, about = "Naming guard - enforce JS/TS file and export naming conventions")]
#[command(long_about = "Scan a source tree for file names that are not kebab-case and for \
    exported functions, variables, classes, interfaces, types and enums whose names break \
    their casing convention.\n\n\
    Environment:\n  \
    NAMING_ENFORCEMENT=warn  report violations without failing\n\n\
    Exit codes:\n  \
    0 - No violations, or violations in warn mode\n  \
    1 - Naming violations found\n  \
    2 - File system or argument error")]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exclude patterns relative to the root (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Report violations but always exit successfully (overrides `NAMING_ENFORCEMENT`)
    #[arg(long)]
    pub warn_only: bool,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
