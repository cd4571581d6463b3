use crate::infra::config::ConfigError;

/// Expected failures of the startup sequence.
///
/// The unresolved-symbol defect is deliberately not a variant: it is a bug,
/// not an outcome, and surfaces as a panic.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}
