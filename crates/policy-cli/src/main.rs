//! Policy Rule Exporter CLI
//!
//! Simulates a batch of district scenarios, then writes the built-in
//! recommendation rules as JSON for the downstream rules engine.

mod cli;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use policy_core::{ConsoleReporter, RuleExporter};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(CliError::Logging)?;

    let config = cli.resolve_config()?;
    let report = RuleExporter::new(config).run(&mut ConsoleReporter)?;

    tracing::debug!(
        path = %report.output_path.display(),
        rules = report.rule_count,
        scenarios = report.scenarios.total,
        checksum = %report.checksum,
        written = report.written,
        "Export finished"
    );
    Ok(())
}
