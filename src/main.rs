use clap::Parser;

use naming_guard::EXIT_ERROR;
use naming_guard::cli::Cli;
use naming_guard::commands::run_check;
use naming_guard::config::{ENFORCEMENT_ENV, ScanConfig};

fn main() {
    let cli = Cli::parse();

    let env_mode = std::env::var(ENFORCEMENT_ENV).ok();
    let exit_code = match ScanConfig::resolve(&cli, env_mode.as_deref()) {
        Ok(config) => run_check(&config),
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
