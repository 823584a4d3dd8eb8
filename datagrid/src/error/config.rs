//! Configuration error types

/// Errors surfaced while resolving a grid configuration.
///
/// These are raised at construction time, never deferred to the first fetch.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The parameter mapping names a role that does not exist.
    #[error("Unknown parameter role: {0}")]
    UnknownRole(String),

    /// A role is mapped to an empty parameter name.
    #[error("Parameter role '{0}' is not mapped")]
    MissingRole(String),

    /// Two roles are mapped to the same parameter name.
    #[error("Parameter '{name}' is mapped to both '{first}' and '{second}'")]
    DuplicateParam {
        /// The aliased parameter name.
        name: String,
        /// The first role using it.
        first: String,
        /// The second role using it.
        second: String,
    },

    /// Pager position other than `top` or `bottom`.
    #[error("Invalid pager position: {0}")]
    InvalidPagerPosition(String),

    /// Options could not be deserialized.
    #[error("Invalid options: {0}")]
    Json(#[from] serde_json::Error),
}
