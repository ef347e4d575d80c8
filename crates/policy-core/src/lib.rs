//! Core layer of the policy rule exporter
//!
//! Holds the rule data model and the built-in rule catalog, the simulated
//! scenario generator, and the [`RuleExporter`] pipeline that narrates a run
//! and writes the rule set to disk.

pub mod config;
pub mod error;
pub mod export;
pub mod report;
pub mod rules;
pub mod scenario;

pub use config::ExportConfig;
pub use error::{Error, Result, RuleViolation};
pub use export::{ExportReport, RuleExporter};
pub use report::{BufferReporter, ConsoleReporter, Reporter};
pub use rules::{
    ActionParams, Condition, Conditions, Event, FactValue, Operator, Rule, RuleSet, Urgency,
};
pub use scenario::{Area, Scenario, ScenarioGenerator, ScenarioSummary};
