//! Adapter from `ConfigurableModule` to `Module`.

use std::sync::OnceLock;

use async_trait::async_trait;

use crate::container::{
    error::ContainerResult,
    ports::{ConfigurableModule, Module, ModuleConfiguration},
    services::Binder,
};

/// Runs a [`ConfigurableModule`] as a [`Module`].
///
/// The binder created on initialization is kept and handed back to the
/// module when it is disposed.
#[derive(Debug)]
pub struct Configured<M> {
    inner: M,
    binder: OnceLock<Binder>,
}

impl<M: ConfigurableModule> Configured<M> {
    /// Wraps a configurable module.
    #[must_use]
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            binder: OnceLock::new(),
        }
    }

    /// Returns the wrapped module.
    #[must_use]
    pub const fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: ConfigurableModule> From<M> for Configured<M> {
    fn from(inner: M) -> Self {
        Self::new(inner)
    }
}

#[async_trait]
impl<M: ConfigurableModule> Module for Configured<M> {
    async fn initialize(&self, configuration: &ModuleConfiguration) -> ContainerResult<()> {
        let binder = self.binder.get_or_init(|| Binder::new(configuration));
        self.inner.configure(binder).await
    }

    async fn dispose(&self) -> ContainerResult<()> {
        match self.binder.get() {
            Some(binder) => self.inner.dispose(binder).await,
            None => Ok(()),
        }
    }
}
