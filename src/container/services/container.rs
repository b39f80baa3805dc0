//! Container lifecycle orchestration.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::config::ports::ConfigProvider;
use crate::container::{
    domain::{CommandHandlerBinding, ContainerState, EventListenerBinding, QueryHandlerBinding},
    error::{ContainerError, ContainerResult},
    ports::{Component, Module, ModuleConfiguration},
    services::ContainerBuilder,
};
use crate::logging::ports::LoggerFactory;
use crate::message::ports::MessageBus;
use crate::registry::{
    domain::{RegistryKey, keys},
    error::RegistryResult,
    ports::{Registry, RegistryExt},
};

struct Lifecycle {
    state: ContainerState,
    initialized_modules: usize,
    components: Vec<Arc<dyn Component>>,
}

/// A dependency injection container.
///
/// The container owns a registry and an ordered list of modules.
/// [`Container::initialize`] lets every module fill the registry, checks the
/// main services are bound, wires discovered handlers to the main message
/// bus and configures the components. [`Container::dispose`] tears all of it
/// down in reverse order.
///
/// # Examples
///
/// ```
/// use palladio::container::adapters::LocalInfrastructureModule;
/// use palladio::container::domain::ContainerState;
/// use palladio::container::services::ContainerBuilder;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let container = ContainerBuilder::new()
///     .name("orders")
///     .module(LocalInfrastructureModule::new())
///     .build();
///
/// container.initialize().await.expect("valid configuration");
/// assert_eq!(container.state(), ContainerState::Initialized);
///
/// container.dispose().await.expect("clean teardown");
/// assert_eq!(container.state(), ContainerState::Disposed);
/// # });
/// ```
pub struct Container {
    name: String,
    registry: Arc<dyn Registry>,
    modules: Vec<Arc<dyn Module>>,
    lifecycle: Mutex<Lifecycle>,
}

impl Container {
    pub(super) fn new(
        name: String,
        registry: Arc<dyn Registry>,
        modules: Vec<Arc<dyn Module>>,
    ) -> Self {
        Self {
            name,
            registry,
            modules,
            lifecycle: Mutex::new(Lifecycle {
                state: ContainerState::Uninitialized,
                initialized_modules: 0,
                components: Vec::new(),
            }),
        }
    }

    /// Returns a fresh builder.
    #[must_use]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Returns the container name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registry holding every managed object.
    #[must_use]
    pub fn registry(&self) -> &Arc<dyn Registry> {
        &self.registry
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ContainerState {
        self.lifecycle().state
    }

    /// Resolves the main message bus.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Registry`] when no bus is bound.
    pub fn message_bus(&self) -> ContainerResult<Arc<dyn MessageBus>> {
        Ok(self.registry.resolve(&keys::MESSAGE_BUS)?)
    }

    /// Resolves the main logger factory.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Registry`] when no logger factory is bound.
    pub fn logger_factory(&self) -> ContainerResult<Arc<dyn LoggerFactory>> {
        Ok(self.registry.resolve(&keys::LOGGER_FACTORY)?)
    }

    /// Resolves the main config provider.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Registry`] when no config provider is bound.
    pub fn config_provider(&self) -> ContainerResult<Arc<dyn ConfigProvider>> {
        Ok(self.registry.resolve(&keys::CONFIG_PROVIDER)?)
    }

    /// Initializes the container.
    ///
    /// 1. registers a weak handle of the container under
    ///    [`keys::CONTAINER`]
    /// 2. initializes the modules, in order
    /// 3. checks the main message bus, logger factory and config provider
    ///    are bound
    /// 4. registers the discovered command handlers, query handlers and event
    ///    listeners on the main message bus
    /// 5. configures the discovered components
    ///
    /// The first failing step stops the initialization and leaves the
    /// container in [`ContainerState::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidState`] unless the container is
    /// uninitialized, [`ContainerError::ConfigurationInvalid`] when a main
    /// service is missing, and module or component errors unchanged.
    pub async fn initialize(self: &Arc<Self>) -> ContainerResult<()> {
        drop(self.transition(
            "initialize",
            |state| state == ContainerState::Uninitialized,
            ContainerState::Initializing,
        )?);
        info!(container = %self.name, modules = self.modules.len(), "initializing container");

        let outcome = self.run_initialization().await;
        let state = if outcome.is_ok() {
            ContainerState::Initialized
        } else {
            ContainerState::Failed
        };
        self.lifecycle().state = state;

        match &outcome {
            Ok(()) => info!(container = %self.name, "container initialized"),
            Err(err) => warn!(container = %self.name, error = %err, "container initialization failed"),
        }
        outcome
    }

    /// Disposes the container.
    ///
    /// Components are disposed in reverse configuration order, then modules
    /// in reverse initialization order. Every step runs even when an earlier
    /// one fails.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidState`] unless the container is
    /// initialized or failed, and [`ContainerError::Disposal`] with every
    /// teardown failure otherwise.
    pub async fn dispose(&self) -> ContainerResult<()> {
        let (components, initialized_modules) = {
            let mut lifecycle = self.transition(
                "dispose",
                ContainerState::is_disposable,
                ContainerState::Disposing,
            )?;
            (
                std::mem::take(&mut lifecycle.components),
                lifecycle.initialized_modules,
            )
        };
        info!(container = %self.name, "disposing container");

        let mut failures = Vec::new();
        for component in components.iter().rev() {
            if let Err(err) = component.dispose().await {
                warn!(container = %self.name, error = %err, "component disposal failed");
                failures.push(err);
            }
        }
        for module in self.modules.iter().take(initialized_modules).rev() {
            if let Err(err) = module.dispose().await {
                warn!(container = %self.name, error = %err, "module disposal failed");
                failures.push(err);
            }
        }

        self.lifecycle().state = ContainerState::Disposed;
        if failures.is_empty() {
            info!(container = %self.name, "container disposed");
            Ok(())
        } else {
            Err(ContainerError::Disposal(failures))
        }
    }

    async fn run_initialization(self: &Arc<Self>) -> ContainerResult<()> {
        self.registry
            .register_value(keys::CONTAINER, Arc::downgrade(self));

        let configuration = ModuleConfiguration::new(self.name.clone(), Arc::clone(&self.registry));
        for module in &self.modules {
            module.initialize(&configuration).await?;
            self.lifecycle().initialized_modules += 1;
        }

        self.validate_configuration()?;
        self.register_handlers()?;
        self.configure_components().await
    }

    fn validate_configuration(&self) -> ContainerResult<()> {
        self.registry
            .resolve::<Arc<dyn MessageBus>>(&keys::MESSAGE_BUS)
            .map_err(ContainerError::ConfigurationInvalid)?;
        self.registry
            .resolve::<Arc<dyn LoggerFactory>>(&keys::LOGGER_FACTORY)
            .map_err(ContainerError::ConfigurationInvalid)?;
        self.registry
            .resolve::<Arc<dyn ConfigProvider>>(&keys::CONFIG_PROVIDER)
            .map_err(ContainerError::ConfigurationInvalid)?;
        Ok(())
    }

    fn register_handlers(&self) -> ContainerResult<()> {
        let bus = self.message_bus()?;

        for binding in self.discover::<CommandHandlerBinding>(&keys::COMMAND_HANDLER)? {
            for name in binding.names() {
                debug!(container = %self.name, command = %name, "registering command handler");
                bus.register_command_handler(name.clone(), binding.handler());
            }
        }
        for binding in self.discover::<QueryHandlerBinding>(&keys::QUERY_HANDLER)? {
            for name in binding.names() {
                debug!(container = %self.name, query = %name, "registering query handler");
                bus.register_query_handler(name.clone(), binding.handler());
            }
        }
        for binding in self.discover::<EventListenerBinding>(&keys::EVENT_LISTENER)? {
            for name in binding.names() {
                debug!(container = %self.name, event = %name, "registering event listener");
                bus.on(name.clone(), binding.listener());
            }
        }
        Ok(())
    }

    async fn configure_components(&self) -> ContainerResult<()> {
        for component in self.discover::<Arc<dyn Component>>(&keys::COMPONENT)? {
            component.configure().await?;
            self.lifecycle().components.push(component);
        }
        Ok(())
    }

    /// Resolves every entry under `key`, or nothing when the key is unbound.
    fn discover<T>(&self, key: &RegistryKey) -> RegistryResult<Vec<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        if self.registry.contains(key) {
            self.registry.resolve_all(key)
        } else {
            Ok(Vec::new())
        }
    }

    /// Moves to `next` when the current state is `allowed`, atomically.
    fn transition(
        &self,
        operation: &'static str,
        allowed: impl FnOnce(ContainerState) -> bool,
        next: ContainerState,
    ) -> ContainerResult<MutexGuard<'_, Lifecycle>> {
        let mut lifecycle = self.lifecycle();
        let state = lifecycle.state;
        if !allowed(state) {
            return Err(ContainerError::InvalidState { operation, state });
        }
        lifecycle.state = next;
        Ok(lifecycle)
    }

    fn lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("name", &self.name)
            .field("modules", &self.modules.len())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
