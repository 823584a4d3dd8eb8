//! Dispatch error types

use crate::dispatch::Category;

/// Errors raised while resolving a configured behavior to a plugin.
///
/// These are diagnostics: call sites log them and fall back to an empty
/// result instead of aborting the render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No registered plugin matches the configured name or composite object.
    #[error("Unknown {category}: {value}")]
    UnknownExtension {
        /// Category searched.
        category: Category,
        /// Plugin name, or the serialized composite object.
        value: String,
    },
}

impl DispatchError {
    /// Creates a new unknown-extension error.
    pub fn unknown(category: Category, value: impl Into<String>) -> Self {
        Self::UnknownExtension {
            category,
            value: value.into(),
        }
    }
}
