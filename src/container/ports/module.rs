//! Module ports.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::container::{error::ContainerResult, services::Binder};
use crate::registry::ports::Registry;

/// What a container hands to each module it initializes.
#[derive(Clone)]
pub struct ModuleConfiguration {
    name: String,
    registry: Arc<dyn Registry>,
}

impl ModuleConfiguration {
    /// Creates a configuration for the named container.
    #[must_use]
    pub fn new(name: impl Into<String>, registry: Arc<dyn Registry>) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    /// Returns the container name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the container registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn Registry> {
        &self.registry
    }
}

impl fmt::Debug for ModuleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleConfiguration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A module or a bounded context following the container lifecycle.
#[async_trait]
pub trait Module: Send + Sync {
    /// Registers the module bindings.
    ///
    /// # Errors
    ///
    /// Any error aborts the container initialization and is returned
    /// unchanged.
    async fn initialize(&self, configuration: &ModuleConfiguration) -> ContainerResult<()>;

    /// Releases the module. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Errors are collected by the container; the teardown continues.
    async fn dispose(&self) -> ContainerResult<()> {
        Ok(())
    }
}

/// A module written against a [`Binder`].
///
/// Wrap it in [`crate::container::adapters::Configured`] to hand it to a
/// container builder.
#[async_trait]
pub trait ConfigurableModule: Send + Sync {
    /// Registers the module bindings through `binder`.
    ///
    /// # Errors
    ///
    /// Any error aborts the container initialization.
    async fn configure(&self, binder: &Binder) -> ContainerResult<()>;

    /// Releases the module. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Errors are collected by the container; the teardown continues.
    async fn dispose(&self, _binder: &Binder) -> ContainerResult<()> {
        Ok(())
    }
}
