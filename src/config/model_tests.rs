use clap::Parser;
use tempfile::TempDir;

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["naming-guard"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

// =============================================================================
// EnforcementMode
// =============================================================================

#[test]
fn mode_defaults_to_block() {
    assert_eq!(EnforcementMode::default(), EnforcementMode::Block);
    assert_eq!(EnforcementMode::from_env_value(None), EnforcementMode::Block);
}

#[test]
fn mode_warn_is_case_insensitive() {
    for value in ["warn", "WARN", "Warn", "wArN"] {
        assert_eq!(
            EnforcementMode::from_env_value(Some(value)),
            EnforcementMode::Warn,
            "{value}"
        );
    }
}

#[test]
fn mode_other_values_block() {
    for value in ["", "block", "warning", "off", " warn", "warn "] {
        assert_eq!(
            EnforcementMode::from_env_value(Some(value)),
            EnforcementMode::Block,
            "{value:?}"
        );
    }
}

// =============================================================================
// ScanConfig::resolve
// =============================================================================

#[test]
fn resolve_uses_env_value() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_string_lossy().to_string();
    let cli = parse(&[root.as_str()]);

    let config = ScanConfig::resolve(&cli, Some("warn")).unwrap();
    assert_eq!(config.mode, EnforcementMode::Warn);

    let config = ScanConfig::resolve(&cli, None).unwrap();
    assert_eq!(config.mode, EnforcementMode::Block);
}

#[test]
fn resolve_warn_only_flag_overrides_env() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_string_lossy().to_string();
    let cli = parse(&[root.as_str(), "--warn-only"]);

    let config = ScanConfig::resolve(&cli, Some("block")).unwrap();
    assert_eq!(config.mode, EnforcementMode::Warn);
}

#[test]
fn resolve_canonicalizes_root() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("src")).unwrap();
    let dotted = temp_dir.path().join("src").join("..");
    let dotted = dotted.to_string_lossy().to_string();
    let cli = parse(&[dotted.as_str()]);

    let config = ScanConfig::resolve(&cli, None).unwrap();

    assert_eq!(
        config.root,
        dunce::canonicalize(temp_dir.path()).unwrap()
    );
}

#[test]
fn resolve_carries_cli_options() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_string_lossy().to_string();
    let cli = parse(&[root.as_str(), "--format", "json", "-x", "legacy/**", "-v"]);

    let config = ScanConfig::resolve(&cli, None).unwrap();

    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.exclude, vec!["legacy/**"]);
    assert_eq!(config.verbose, 1);
}

#[test]
fn resolve_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");
    let missing = missing.to_string_lossy().to_string();
    let cli = parse(&[missing.as_str()]);

    let result = ScanConfig::resolve(&cli, None);

    assert!(matches!(result, Err(NamingGuardError::RootNotFound { .. })));
}
