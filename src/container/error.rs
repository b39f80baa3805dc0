//! Error types for the container lifecycle.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use super::domain::ContainerState;
use crate::config::error::ConfigError;
use crate::message::error::BusError;
use crate::registry::error::RegistryError;

/// Errors raised while initializing or disposing a container.
#[derive(Debug, Clone, Error)]
pub enum ContainerError {
    /// A main service is missing after every module was initialized.
    #[error("the container configuration is not valid: {0}")]
    ConfigurationInvalid(#[source] RegistryError),

    /// A registry lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A bus operation failed.
    #[error(transparent)]
    Bus(#[from] BusError),

    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A module failed to initialize or dispose.
    #[error("module failed: {0}")]
    Module(Arc<dyn StdError + Send + Sync>),

    /// A component failed to configure or dispose.
    #[error("component failed: {0}")]
    Component(Arc<dyn StdError + Send + Sync>),

    /// The operation is not allowed in the current lifecycle state.
    #[error("cannot {operation} a container in the {state} state")]
    InvalidState {
        /// The rejected operation.
        operation: &'static str,
        /// The state the container was in.
        state: ContainerState,
    },

    /// One or more teardown steps failed; every step still ran.
    #[error("{} step(s) failed while disposing the container", .0.len())]
    Disposal(Vec<ContainerError>),
}

impl ContainerError {
    /// Wraps a module failure.
    pub fn module(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Module(Arc::new(err))
    }

    /// Wraps a component failure.
    pub fn component(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Component(Arc::new(err))
    }
}

/// Result type for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;
