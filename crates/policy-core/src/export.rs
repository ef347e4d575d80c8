//! Rule export pipeline
//!
//! A run is linear: announce, simulate scenarios, announce the policy test,
//! build and validate the built-in rule set, write it, confirm. The written
//! document depends only on the rule catalog, never on the scenarios.

use crate::rules::{RuleSet, catalog};
use crate::scenario::{ScenarioGenerator, ScenarioSummary};
use crate::{Error, ExportConfig, Reporter, Result};
use policy_fs::{checksum, io};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub output_path: PathBuf,
    pub scenarios: ScenarioSummary,
    pub rule_count: usize,
    /// `sha256:<hex>` of the rendered document
    pub checksum: String,
    /// False for dry runs
    pub written: bool,
}

/// Runs the export pipeline for one configuration
#[derive(Debug, Clone, Default)]
pub struct RuleExporter {
    config: ExportConfig,
}

impl RuleExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// The rule set this exporter writes.
    pub fn rule_set(&self) -> RuleSet {
        catalog::builtin_rule_set()
    }

    /// Build, validate and render the rule set without touching disk.
    pub fn render(&self) -> Result<String> {
        let rules = self.rule_set();
        rules.validate()?;
        rules.to_json_pretty()
    }

    /// Run every step, narrating progress to `reporter`.
    ///
    /// # Errors
    ///
    /// [`Error::OutputWrite`] if the destination directory is missing or not
    /// writable. Nothing is written in that case.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<ExportReport> {
        let config = &self.config;
        config.validate()?;

        reporter.line("Initializing EMA Workbench Simulation...");
        reporter.line(&format!(
            "Generating {} scenarios for '{}'...",
            config.scenario_count, config.category
        ));

        let scenarios = self.simulate();

        reporter.line(&format!("Testing Policy: '{}'...", config.policy_name));

        let rules = self.rule_set();
        rules.validate()?;
        let document = rules.to_json_pretty()?;
        let checksum = checksum::compute_content_checksum(&document);
        debug!(rules = rules.len(), %checksum, "Rendered rule set");

        let path = &config.output_path;
        if config.dry_run {
            reporter.document(&document);
            reporter.line(&format!(
                "Dry run: policies not written to {}",
                path.display()
            ));
        } else {
            io::write_text(path, &document).map_err(|source| Error::OutputWrite {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "Rule set written");
            reporter.line(&format!("Robust policies exported to {}", path.display()));
        }

        Ok(ExportReport {
            output_path: path.clone(),
            scenarios,
            rule_count: rules.len(),
            checksum,
            written: !config.dry_run,
        })
    }

    fn simulate(&self) -> ScenarioSummary {
        let count = self.config.scenario_count;
        let mut generator = match self.config.seed {
            Some(seed) => ScenarioGenerator::with_seed(count, seed),
            None => ScenarioGenerator::new(count),
        };
        let summary = generator.generate();

        debug!(
            total = summary.total,
            rural = summary.rural,
            urban = summary.urban,
            low_saturation = summary.low_saturation,
            mean_saturation = summary.mean_saturation(),
            "Scenario batch simulated"
        );
        summary
    }
}
