//! CLI argument parsing using clap derive

use clap::Parser;
use policy_core::ExportConfig;
use std::path::PathBuf;

use crate::error::Result;

/// Policy Rule Exporter - simulate district scenarios and export the
/// recommendation rule set as JSON
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "policy-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Load settings from a .toml, .json or .yaml file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file (default: ../src/data/rules_export.json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of scenarios to simulate (default: 1000)
    #[arg(short = 'n', long = "scenarios", value_name = "N")]
    pub scenarios: Option<usize>,

    /// Seed for scenario generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the rule document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve_config(&self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(count) = self.scenarios {
            config.scenario_count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.dry_run {
            config.dry_run = true;
        }

        tracing::debug!(?config, "Resolved export config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("policy-export").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.resolve_config().unwrap(), ExportConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["-o", "out.json", "-n", "12", "--seed", "4", "--dry-run"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.scenario_count, 12);
        assert_eq!(config.seed, Some(4));
        assert!(config.dry_run);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("export.toml");
        fs::write(&path, "scenario_count = 30\npolicy_name = \"Weekend Camp\"\n").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--scenarios", "7"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.scenario_count, 7);
        assert_eq!(config.policy_name, "Weekend Camp");
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["policy-export", "extra"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_scenarios() {
        assert!(Cli::try_parse_from(["policy-export", "-n", "many"]).is_err());
    }
}
