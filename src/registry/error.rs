//! Error types for registry resolution.

use super::domain::RegistryKey;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned while resolving registry entries.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No entry was ever registered under the key.
    #[error("unable to resolve an entry with the key ({0})")]
    KeyNotFound(RegistryKey),

    /// The entry exists but holds a value of another type.
    #[error("the entry with the key ({key}) is not of type {expected}")]
    TypeMismatch {
        /// Key that was resolved.
        key: RegistryKey,
        /// Type name requested by the caller.
        expected: &'static str,
    },

    /// A factory failed to build its value.
    #[error("the factory for the key ({key}) failed: {source}")]
    Factory {
        /// Key whose factory failed.
        key: RegistryKey,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl RegistryError {
    /// Wraps a failure raised while a factory builds its value.
    pub fn factory(key: RegistryKey, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Factory {
            key,
            source: Arc::new(err),
        }
    }

    /// Returns the key the failure relates to.
    #[must_use]
    pub const fn key(&self) -> &RegistryKey {
        match self {
            Self::KeyNotFound(key) | Self::TypeMismatch { key, .. } | Self::Factory { key, .. } => {
                key
            }
        }
    }
}
