//! In-process infrastructure module.

use std::sync::{Arc, OnceLock, Weak};

use async_trait::async_trait;

use crate::config::{adapters::memory::InMemoryConfigProvider, ports::ConfigProvider};
use crate::container::{
    error::ContainerResult,
    ports::{Module, ModuleConfiguration},
    services::{Binder, Container},
};
use crate::logging::{adapters::tracing_logger::TracingLoggerFactory, ports::LoggerFactory};
use crate::message::{adapters::local::LocalMessageBus, ports::MessageBus};
use crate::registry::{
    domain::{FactoryOptions, keys},
    ports::{Registry, RegistryExt},
};

/// Binds the main services of a single-process container.
///
/// Every service is a singleton factory, so modules initialized later can
/// still replace any of them:
///
/// - [`InMemoryConfigProvider`] under [`keys::CONFIG_PROVIDER`]
/// - [`TracingLoggerFactory`] named after the container under
///   [`keys::LOGGER_FACTORY`]
/// - [`LocalMessageBus`] under [`keys::MESSAGE_BUS`]
///
/// Disposing the module disposes the main message bus.
#[derive(Debug, Default)]
pub struct LocalInfrastructureModule {
    binder: OnceLock<Binder>,
}

impl LocalInfrastructureModule {
    /// Creates the module.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn logger_factory(registry: &dyn Registry) -> Arc<dyn LoggerFactory> {
    let owner = registry
        .resolve::<Weak<Container>>(&keys::CONTAINER)
        .ok()
        .and_then(|weak| weak.upgrade());
    Arc::new(owner.map_or_else(TracingLoggerFactory::new, |container| {
        TracingLoggerFactory::for_container(container.name())
    }))
}

#[async_trait]
impl Module for LocalInfrastructureModule {
    async fn initialize(&self, configuration: &ModuleConfiguration) -> ContainerResult<()> {
        let binder = self.binder.get_or_init(|| Binder::new(configuration));
        binder
            .registry()
            .register_factory(
                keys::CONFIG_PROVIDER,
                |_: &dyn Registry| {
                    Ok(Arc::new(InMemoryConfigProvider::new()) as Arc<dyn ConfigProvider>)
                },
                FactoryOptions::singleton(),
            )
            .register_factory(
                keys::LOGGER_FACTORY,
                |registry: &dyn Registry| Ok(logger_factory(registry)),
                FactoryOptions::singleton(),
            )
            .register_factory(
                keys::MESSAGE_BUS,
                |registry: &dyn Registry| {
                    let loggers = registry.resolve::<Arc<dyn LoggerFactory>>(&keys::LOGGER_FACTORY)?;
                    Ok(Arc::new(LocalMessageBus::new(loggers.as_ref())) as Arc<dyn MessageBus>)
                },
                FactoryOptions::singleton(),
            );
        Ok(())
    }

    async fn dispose(&self) -> ContainerResult<()> {
        if let Some(binder) = self.binder.get() {
            let bus = binder
                .registry()
                .resolve::<Arc<dyn MessageBus>>(&keys::MESSAGE_BUS)?;
            bus.dispose().await;
        }
        Ok(())
    }
}
