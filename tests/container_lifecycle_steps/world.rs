//! Shared world state for container lifecycle BDD scenarios.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use palladio::container::{
    adapters::{Configured, LocalInfrastructureModule},
    error::{ContainerError, ContainerResult},
    ports::{Component, ConfigurableModule, Module},
    services::{Binder, Container, ContainerBuilder},
};
use palladio::message::{
    domain::{Command, Message, Query, ResultMessage},
    error::BusResult,
    ports::{CommandHandler, CommandOutcome, MessageBus, QueryHandler},
};
use rstest::fixture;
use tracing_subscriber::EnvFilter;

/// Ordered record of lifecycle callbacks.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    /// Appends an entry.
    pub fn push(&self, entry: String) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Returns a copy of every entry.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Counts the entries equal to `entry`.
    pub fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|recorded| *recorded == entry).count()
    }

    /// Returns the position of the first entry equal to `entry`.
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|recorded| recorded == entry)
    }
}

/// What a scenario module binds.
pub enum Binding {
    /// A command handler for the named command.
    CommandHandler(String),
    /// A query handler for the named query.
    QueryHandler(String),
    /// A recording component with the given name.
    Component(String),
}

/// Module recording its disposal in the journal.
pub struct ScenarioModule {
    name: String,
    binding: Binding,
    journal: Journal,
}

impl ScenarioModule {
    /// Creates a module binding one collaborator.
    pub fn new(name: String, binding: Binding, journal: &Journal) -> Self {
        Self {
            name,
            binding,
            journal: journal.clone(),
        }
    }
}

#[async_trait]
impl ConfigurableModule for ScenarioModule {
    async fn configure(&self, binder: &Binder) -> ContainerResult<()> {
        match &self.binding {
            Binding::CommandHandler(command) => {
                binder.command_handler([command.clone()], Arc::new(Acknowledge));
            }
            Binding::QueryHandler(query) => {
                binder.query_handler([query.clone()], Arc::new(Answer));
            }
            Binding::Component(component) => {
                binder.component(Arc::new(RecordingComponent {
                    name: component.clone(),
                    journal: self.journal.clone(),
                }));
            }
        }
        Ok(())
    }

    async fn dispose(&self, _binder: &Binder) -> ContainerResult<()> {
        self.journal.push(format!("{}:dispose", self.name));
        Ok(())
    }
}

struct Acknowledge;

#[async_trait]
impl CommandHandler for Acknowledge {
    async fn handle(&self, command: &Command) -> BusResult<CommandOutcome> {
        Ok((ResultMessage::new(command.name(), serde_json::Value::Null), Vec::new()))
    }
}

struct Answer;

#[async_trait]
impl QueryHandler for Answer {
    async fn handle(&self, query: &Query) -> BusResult<ResultMessage> {
        Ok(ResultMessage::empty(query))
    }
}

struct RecordingComponent {
    name: String,
    journal: Journal,
}

#[async_trait]
impl Component for RecordingComponent {
    async fn configure(&self) -> ContainerResult<()> {
        self.journal.push(format!("{}:configure", self.name));
        Ok(())
    }

    async fn dispose(&self) -> ContainerResult<()> {
        self.journal.push(format!("{}:dispose", self.name));
        Ok(())
    }
}

/// Scenario world for container lifecycle behaviour tests.
pub struct ContainerWorld {
    /// Lifecycle callbacks recorded by modules and components.
    pub journal: Journal,
    /// Modules added to the container, in order.
    pub modules: Vec<Arc<dyn Module>>,
    /// Whether the local infrastructure module comes first.
    pub with_infrastructure: bool,
    /// The container, once built.
    pub container: Option<Arc<Container>>,
    /// The main bus, captured after initialization.
    pub bus: Option<Arc<dyn MessageBus>>,
    /// Result of the last initialization.
    pub initialization: Option<Result<(), ContainerError>>,
    /// The last executed command and its result.
    pub executed: Option<(Command, ResultMessage)>,
}

impl ContainerWorld {
    /// Creates a world with local infrastructure and no module.
    #[must_use]
    pub fn new() -> Self {
        Self {
            journal: Journal::default(),
            modules: Vec::new(),
            with_infrastructure: true,
            container: None,
            bus: None,
            initialization: None,
            executed: None,
        }
    }

    /// Adds a scenario module.
    pub fn add_module(&mut self, name: String, binding: Binding) {
        let module = ScenarioModule::new(name, binding, &self.journal);
        self.modules.push(Arc::new(Configured::new(module)));
    }

    /// Builds the container from the collected modules.
    pub fn build(&mut self) -> Arc<Container> {
        let mut builder = ContainerBuilder::new().name("scenario");
        if self.with_infrastructure {
            builder = builder.module(LocalInfrastructureModule::new());
        }
        let container = builder.modules(self.modules.iter().cloned()).build();
        self.container = Some(Arc::clone(&container));
        container
    }

    /// Returns the built container.
    pub fn container(&self) -> Result<&Arc<Container>, eyre::Report> {
        self.container
            .as_ref()
            .ok_or_else(|| eyre::eyre!("the container was not built"))
    }
}

impl Default for ContainerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ContainerWorld {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
    ContainerWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
