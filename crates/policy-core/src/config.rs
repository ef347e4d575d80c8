//! Export configuration
//!
//! Every field has a default, so an empty config file (or none at all)
//! reproduces the standard run: 1000 scenarios, output to
//! `../src/data/rules_export.json`.

use crate::{Error, Result};
use policy_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output location relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "../src/data/rules_export.json";
pub const DEFAULT_SCENARIO_COUNT: usize = 1000;
pub const DEFAULT_CATEGORY: &str = "District Saturation";
pub const DEFAULT_POLICY_NAME: &str = "Mobile Van Deployment";

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_scenario_count() -> usize {
    DEFAULT_SCENARIO_COUNT
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_policy_name() -> String {
    DEFAULT_POLICY_NAME.to_string()
}

/// Resolved settings for one export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Destination file; its directory must already exist
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Number of scenarios to simulate
    #[serde(default = "default_scenario_count")]
    pub scenario_count: usize,

    /// Scenario category named in the narration
    #[serde(default = "default_category")]
    pub category: String,

    /// Policy named in the narration
    #[serde(default = "default_policy_name")]
    pub policy_name: String,

    /// Fixed RNG seed; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Print the document instead of writing it
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            scenario_count: default_scenario_count(),
            category: default_category(),
            policy_name: default_policy_name(),
            seed: None,
            dry_run: false,
        }
    }
}

impl ExportConfig {
    /// Load from a `.toml`, `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = ConfigStore::new().load(path).map_err(Error::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no run could honor.
    pub fn validate(&self) -> Result<()> {
        if self.scenario_count == 0 {
            return Err(Error::invalid_config("scenario_count must be at least 1"));
        }
        if self.output_path.file_name().is_none() {
            return Err(Error::invalid_config(format!(
                "output_path '{}' does not name a file",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_matches_standard_run() {
        let config = ExportConfig::default();
        assert_eq!(config.output_path, PathBuf::from("../src/data/rules_export.json"));
        assert_eq!(config.scenario_count, 1000);
        assert_eq!(config.category, "District Saturation");
        assert_eq!(config.policy_name, "Mobile Van Deployment");
        assert_eq!(config.seed, None);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: ExportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: ExportConfig = toml::from_str("scenario_count = 25\nseed = 9\n").unwrap();
        assert_eq!(config.scenario_count, 25);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<ExportConfig, _> = toml::from_str("scenarios = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_scenarios() {
        let config = ExportConfig {
            scenario_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_directory_like_path() {
        let config = ExportConfig {
            output_path: PathBuf::from(".."),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = ExportConfig {
            output_path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
