//! Error types for configuration access.

use std::sync::Arc;

use thiserror::Error;

use super::ConfigScope;

/// Errors returned by configuration providers.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The stored document does not match the requested type.
    #[error("the configuration for scope ({scope}) cannot be read: {source}")]
    Deserialize {
        /// Scope that was read.
        scope: ConfigScope,
        /// Underlying serde error.
        source: Arc<serde_json::Error>,
    },

    /// A typed patch could not be turned into a configuration document.
    #[error("the patch for scope ({scope}) is not a JSON object")]
    NotAnObject {
        /// Scope that was patched.
        scope: ConfigScope,
    },

    /// A typed patch could not be serialized.
    #[error("the patch for scope ({scope}) cannot be serialized: {source}")]
    Serialize {
        /// Scope that was patched.
        scope: ConfigScope,
        /// Underlying serde error.
        source: Arc<serde_json::Error>,
    },
}

/// Result type for configuration access.
pub type ConfigResult<T> = Result<T, ConfigError>;
