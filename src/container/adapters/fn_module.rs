//! Modules defined inline by a closure.

use std::future::Future;

use async_trait::async_trait;

use crate::container::{
    error::ContainerResult,
    ports::{Module, ModuleConfiguration},
    services::Binder,
};

/// A module whose initialization is a closure over a [`Binder`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use palladio::container::adapters::FnModule;
/// use palladio::logging::adapters::tracing_logger::TracingLoggerFactory;
///
/// let module = FnModule::new(|binder| {
///     binder.set_logger_factory(Arc::new(TracingLoggerFactory::new()));
///     Ok(())
/// });
/// # drop(module);
/// ```
pub struct FnModule<F> {
    configure: F,
}

impl<F> FnModule<F>
where
    F: Fn(&Binder) -> ContainerResult<()> + Send + Sync,
{
    /// Creates a module from a closure.
    #[must_use]
    pub const fn new(configure: F) -> Self {
        Self { configure }
    }
}

#[async_trait]
impl<F> Module for FnModule<F>
where
    F: Fn(&Binder) -> ContainerResult<()> + Send + Sync,
{
    async fn initialize(&self, configuration: &ModuleConfiguration) -> ContainerResult<()> {
        (self.configure)(&Binder::new(configuration))
    }
}

/// A module whose initialization is an async closure over a [`Binder`].
///
/// The closure receives its own [`Binder`] so the returned future can await
/// collaborators resolved from the registry, e.g. the main config provider
/// bound by an earlier module.
///
/// # Examples
///
/// ```
/// use palladio::config::ConfigScope;
/// use palladio::config::ports::{ConfigProvider, ConfigProviderExt};
/// use palladio::container::adapters::AsyncFnModule;
/// use palladio::container::error::ContainerError;
/// use palladio::registry::{domain::keys, ports::RegistryExt};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let module = AsyncFnModule::new(|binder| async move {
///     let provider: Arc<dyn ConfigProvider> = binder.registry().resolve(&keys::CONFIG_PROVIDER)?;
///     provider
///         .patch_with(&ConfigScope::from("orders"), &json!({ "currency": "EUR" }))
///         .await?;
///     Ok::<(), ContainerError>(())
/// });
/// # drop(module);
/// ```
pub struct AsyncFnModule<F> {
    configure: F,
}

impl<F, Fut> AsyncFnModule<F>
where
    F: Fn(Binder) -> Fut + Send + Sync,
    Fut: Future<Output = ContainerResult<()>> + Send + 'static,
{
    /// Creates a module from an async closure.
    #[must_use]
    pub const fn new(configure: F) -> Self {
        Self { configure }
    }
}

#[async_trait]
impl<F, Fut> Module for AsyncFnModule<F>
where
    F: Fn(Binder) -> Fut + Send + Sync,
    Fut: Future<Output = ContainerResult<()>> + Send + 'static,
{
    async fn initialize(&self, configuration: &ModuleConfiguration) -> ContainerResult<()> {
        (self.configure)(Binder::new(configuration)).await
    }
}
