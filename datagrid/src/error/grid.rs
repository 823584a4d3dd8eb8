//! Top-level error type

use super::{ConfigError, ParseError, RegistryError, SourceError};

/// Errors returned by grid operations.
///
/// Data errors (source, parse) abort the fetch cycle before rendering; the
/// container keeps its previous content. No retry is attempted.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plugin registration error.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Source failed to deliver data.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Source payload could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl GridError {
    /// Returns `true` for data errors (source or parse failure).
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Source(_) | Self::Parse(_))
    }
}
