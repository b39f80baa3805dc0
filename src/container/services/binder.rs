//! Registration helpers for module authors.

use std::sync::Arc;

use crate::config::ports::ConfigProvider;
use crate::container::{
    domain::{CommandHandlerBinding, EventListenerBinding, QueryHandlerBinding},
    ports::{Component, ModuleConfiguration},
};
use crate::logging::ports::LoggerFactory;
use crate::message::{
    domain::MessageName,
    ports::{CommandHandler, EventListener, MessageBus, QueryHandler},
};
use crate::registry::{
    domain::keys,
    ports::{Registry, RegistryExt},
};

/// Binds services and handlers into the registry of a container.
///
/// Every method registers a value under a well-known key, so the last
/// module to set a main service wins.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use palladio::container::ports::ModuleConfiguration;
/// use palladio::container::services::Binder;
/// use palladio::logging::adapters::tracing_logger::TracingLoggerFactory;
/// use palladio::registry::adapters::memory::DefaultRegistry;
/// use palladio::registry::domain::keys;
///
/// let configuration = ModuleConfiguration::new("orders", DefaultRegistry::new_shared());
/// let binder = Binder::new(&configuration);
/// binder.set_logger_factory(Arc::new(TracingLoggerFactory::for_container("orders")));
///
/// assert!(binder.registry().contains(&keys::LOGGER_FACTORY));
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    configuration: ModuleConfiguration,
}

impl Binder {
    /// Creates a binder over the registry of a module configuration.
    #[must_use]
    pub fn new(configuration: &ModuleConfiguration) -> Self {
        Self {
            configuration: configuration.clone(),
        }
    }

    /// Returns the name of the container being configured.
    #[must_use]
    pub fn container_name(&self) -> &str {
        self.configuration.name()
    }

    /// Returns the registry of the container being configured.
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn Registry> {
        self.configuration.registry()
    }

    /// Sets the main message bus.
    pub fn set_message_bus(&self, bus: Arc<dyn MessageBus>) -> &Self {
        self.registry().register_value(keys::MESSAGE_BUS, bus);
        self
    }

    /// Sets the main logger factory.
    pub fn set_logger_factory(&self, factory: Arc<dyn LoggerFactory>) -> &Self {
        self.registry().register_value(keys::LOGGER_FACTORY, factory);
        self
    }

    /// Sets the main config provider.
    pub fn set_config_provider(&self, provider: Arc<dyn ConfigProvider>) -> &Self {
        self.registry().register_value(keys::CONFIG_PROVIDER, provider);
        self
    }

    /// Binds a command handler to command names.
    pub fn command_handler<I, N>(&self, names: I, handler: Arc<dyn CommandHandler>) -> &Self
    where
        I: IntoIterator<Item = N>,
        N: Into<MessageName>,
    {
        let binding = CommandHandlerBinding::new(names, handler);
        self.registry().register_value(keys::COMMAND_HANDLER, binding);
        self
    }

    /// Binds a query handler to query names.
    pub fn query_handler<I, N>(&self, names: I, handler: Arc<dyn QueryHandler>) -> &Self
    where
        I: IntoIterator<Item = N>,
        N: Into<MessageName>,
    {
        let binding = QueryHandlerBinding::new(names, handler);
        self.registry().register_value(keys::QUERY_HANDLER, binding);
        self
    }

    /// Binds an event listener to event names.
    pub fn event_listener<I, N>(&self, names: I, listener: Arc<dyn EventListener>) -> &Self
    where
        I: IntoIterator<Item = N>,
        N: Into<MessageName>,
    {
        let binding = EventListenerBinding::new(names, listener);
        self.registry().register_value(keys::EVENT_LISTENER, binding);
        self
    }

    /// Adds a component.
    pub fn component(&self, component: Arc<dyn Component>) -> &Self {
        self.registry().register_value(keys::COMPONENT, component);
        self
    }
}
