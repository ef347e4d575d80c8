//! Error types for policy-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from policy-core
    #[error(transparent)]
    Core(#[from] policy_core::Error),

    /// Tracing subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}
