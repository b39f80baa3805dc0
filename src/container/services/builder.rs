//! Container builder.

use std::sync::Arc;

use uuid::Uuid;

use crate::container::{ports::Module, services::Container};
use crate::registry::{adapters::memory::DefaultRegistry, ports::Registry};

/// Collects the modules, name and registry of a [`Container`].
///
/// Building does not validate anything: a container only checks its
/// configuration when it is initialized.
#[derive(Default)]
pub struct ContainerBuilder {
    modules: Vec<Arc<dyn Module>>,
    name: Option<String>,
    registry: Option<Arc<dyn Registry>>,
}

impl ContainerBuilder {
    /// Returns a fresh builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom container name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a custom registry.
    #[must_use]
    pub fn registry(mut self, registry: Arc<dyn Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Appends a module.
    #[must_use]
    pub fn module(mut self, module: impl Module + 'static) -> Self {
        self.modules.push(Arc::new(module));
        self
    }

    /// Appends shared modules, in order.
    #[must_use]
    pub fn modules(mut self, modules: impl IntoIterator<Item = Arc<dyn Module>>) -> Self {
        self.modules.extend(modules);
        self
    }

    /// Builds the container.
    ///
    /// Without a custom name the container is called `container-<uuid>`;
    /// without a custom registry it gets a fresh [`DefaultRegistry`].
    #[must_use]
    pub fn build(self) -> Arc<Container> {
        let name = self
            .name
            .unwrap_or_else(|| format!("container-{}", Uuid::new_v4().simple()));
        let registry = self
            .registry
            .unwrap_or_else(|| DefaultRegistry::new_shared() as Arc<dyn Registry>);
        Arc::new(Container::new(name, registry, self.modules))
    }
}
