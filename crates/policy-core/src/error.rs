//! Error types for policy-core

use std::path::PathBuf;

/// Result type for policy-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or exporting a rule set
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The rule document could not be written to its destination
    #[error("Failed to write rules to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: policy_fs::Error,
    },

    #[error("Failed to serialize rules: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Rule {index} is invalid: {reason}")]
    InvalidRule {
        index: usize,
        #[source]
        reason: RuleViolation,
    },

    /// Config file could not be read or parsed
    #[error(transparent)]
    Config(policy_fs::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Structural problems found by [`Rule::validate`](crate::Rule::validate)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleViolation {
    #[error("rule has no conditions")]
    NoConditions,

    #[error("condition on empty fact with value {value:?}")]
    EmptyFact { value: crate::FactValue },

    #[error("event type is empty")]
    EmptyEventType,

    #[error("action title is empty")]
    EmptyTitle,

    #[error("'{title}' has no action steps")]
    NoActionSteps { title: String },

    #[error("'{title}' confidence {confidence} is outside [0, 1]")]
    ConfidenceOutOfRange { title: String, confidence: f64 },
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
