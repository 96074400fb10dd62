use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{NamingGuardError, Result};
use crate::output::OutputFormat;

/// Environment variable selecting the enforcement mode.
pub const ENFORCEMENT_ENV: &str = "NAMING_ENFORCEMENT";

/// Whether violations fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnforcementMode {
    /// Violations exit with a failure code.
    #[default]
    Block,
    /// Violations are reported, the run still succeeds.
    Warn,
}

impl EnforcementMode {
    /// Interpret the value of `NAMING_ENFORCEMENT`.
    ///
    /// Only `warn` (any case) selects [`EnforcementMode::Warn`]; every other
    /// value, including an unset variable, blocks.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("warn") => Self::Warn,
            _ => Self::Block,
        }
    }
}

/// Fully resolved settings for one scan. Built once at startup.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub mode: EnforcementMode,
    pub format: OutputFormat,
    pub exclude: Vec<String>,
    pub verbose: u8,
}

impl ScanConfig {
    /// Merge CLI arguments with the enforcement environment value.
    ///
    /// Precedence for the mode: `--warn-only` > `NAMING_ENFORCEMENT` > block.
    ///
    /// # Errors
    /// Returns an error if the root directory cannot be resolved.
    pub fn resolve(cli: &Cli, env_value: Option<&str>) -> Result<Self> {
        let mode = if cli.warn_only {
            EnforcementMode::Warn
        } else {
            EnforcementMode::from_env_value(env_value)
        };

        Ok(Self {
            root: resolve_root(&cli.root)?,
            mode,
            format: cli.format,
            exclude: cli.exclude.clone(),
            verbose: cli.verbose,
        })
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    dunce::canonicalize(root).map_err(|source| NamingGuardError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
