//! Error types for message dispatch.

use std::sync::Arc;

use thiserror::Error;

use super::domain::{MessageKind, MessageName};
use crate::registry::error::RegistryError;

/// Errors raised while dispatching messages.
#[derive(Debug, Clone, Error)]
pub enum BusError {
    /// No handler is registered for the command or query name.
    #[error("unable to find a {kind} handler for ({name})")]
    HandlerNotFound {
        /// Kind of the undeliverable message.
        kind: MessageKind,
        /// Name of the undeliverable message.
        name: MessageName,
    },

    /// A handler or listener failed.
    #[error("message handler failed: {0}")]
    Handler(Arc<dyn std::error::Error + Send + Sync>),

    /// A message body could not be converted.
    #[error("message body conversion failed: {0}")]
    Body(Arc<serde_json::Error>),

    /// A handler dependency could not be resolved.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl BusError {
    /// Wraps a handler failure.
    pub fn handler(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Handler(Arc::new(err))
    }

    pub(crate) fn body(err: serde_json::Error) -> Self {
        Self::Body(Arc::new(err))
    }

    pub(crate) const fn handler_not_found(kind: MessageKind, name: MessageName) -> Self {
        Self::HandlerNotFound { kind, name }
    }
}

/// Result type for message dispatch.
pub type BusResult<T> = Result<T, BusError>;
