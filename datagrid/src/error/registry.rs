//! Registry error types

/// Errors raised when registering or extending plugins.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Category name is not one of `source`, `sorter`, `pager`, `cell`.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Plugin kind does not belong to the requested category.
    #[error("Plugin of kind '{actual}' cannot be registered under '{expected}'")]
    CategoryMismatch {
        /// Category the caller registered under.
        expected: String,
        /// Category of the supplied plugin.
        actual: String,
    },

    /// `extend` was called with a base that is not registered.
    #[error("Unknown {category} plugin: {name}")]
    NotFound {
        /// Category searched.
        category: String,
        /// Missing base name.
        name: String,
    },
}
