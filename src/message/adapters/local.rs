//! In-process implementation of the `MessageBus` port.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::logging::{
    adapters::tracing_logger::TracingLoggerFactory,
    ports::{Logger, LoggerFactory},
};
use crate::message::{
    domain::{Command, Event, Message, MessageKind, MessageName, Query, ResultMessage},
    error::{BusError, BusResult},
    ports::{CommandHandler, CommandOutcome, EventListener, MessageBus, QueryHandler},
};

const LOGGER_NAME: &str = "LocalMessageBus";

#[derive(Clone)]
struct ListenerEntry {
    id: u64,
    listener: Arc<dyn EventListener>,
    once: bool,
}

impl ListenerEntry {
    fn is(&self, listener: &Arc<dyn EventListener>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.listener), Arc::as_ptr(listener))
    }
}

#[derive(Default)]
struct BusTables {
    commands: HashMap<MessageName, Arc<dyn CommandHandler>>,
    queries: HashMap<MessageName, Arc<dyn QueryHandler>>,
    listeners: HashMap<MessageName, Vec<ListenerEntry>>,
    disposed: bool,
}

/// Message bus dispatching on the caller's task.
///
/// Handlers and listeners are awaited one at a time. The routing tables are
/// only locked to copy handlers out, never while a handler runs, so handlers
/// may register listeners or publish further events.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use async_trait::async_trait;
/// use palladio::message::adapters::local::LocalMessageBus;
/// use palladio::message::domain::{Message, Query, ResultMessage};
/// use palladio::message::error::BusResult;
/// use palladio::message::ports::{MessageBus, QueryHandler};
/// use serde_json::json;
///
/// struct Echo;
///
/// #[async_trait]
/// impl QueryHandler for Echo {
///     async fn handle(&self, query: &Query) -> BusResult<ResultMessage> {
///         Ok(ResultMessage::create(query, query.body().clone()))
///     }
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let bus = LocalMessageBus::default();
/// bus.register_query_handler("Echo".into(), Arc::new(Echo));
///
/// let query = Query::new("Echo", json!("ping"));
/// let result = bus.call(&query).await.unwrap();
/// assert_eq!(result.body(), &json!("ping"));
/// assert_eq!(result.correlation_id(), Some(query.message_id()));
/// # });
/// ```
pub struct LocalMessageBus {
    logger: Arc<dyn Logger>,
    tables: RwLock<BusTables>,
    next_listener_id: AtomicU64,
}

impl LocalMessageBus {
    /// Creates a bus logging through a logger named `LocalMessageBus`.
    #[must_use]
    pub fn new(logger_factory: &dyn LoggerFactory) -> Self {
        Self {
            logger: logger_factory.create(&[LOGGER_NAME]),
            tables: RwLock::new(BusTables::default()),
            next_listener_id: AtomicU64::new(0),
        }
    }

    /// Returns `true` once [`MessageBus::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.read().disposed
    }

    fn read(&self) -> RwLockReadGuard<'_, BusTables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BusTables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `register` against the tables unless the bus is disposed.
    fn register(&self, what: &str, name: &MessageName, register: impl FnOnce(&mut BusTables)) {
        let mut tables = self.write();
        if tables.disposed {
            drop(tables);
            self.logger.warn(&format!(
                "ignoring {what} registration for ({name}) on a disposed bus"
            ));
            return;
        }
        register(&mut *tables);
    }

    fn add_listener(&self, name: MessageName, listener: Arc<dyn EventListener>, once: bool) {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let entry = ListenerEntry { id, listener, once };
        self.register("listener", &name.clone(), |tables| {
            tables.listeners.entry(name).or_default().push(entry);
        });
    }

    /// Removes a once listener, returning `true` if this call removed it.
    fn claim(&self, name: &MessageName, id: u64) -> bool {
        let mut tables = self.write();
        let Some(entries) = tables.listeners.get_mut(name) else {
            return false;
        };
        let Some(position) = entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        entries.remove(position);
        if entries.is_empty() {
            tables.listeners.remove(name);
        }
        true
    }

    async fn deliver(&self, event: &Event) -> BusResult<()> {
        let snapshot = self
            .read()
            .listeners
            .get(event.name())
            .cloned()
            .unwrap_or_default();

        if snapshot.is_empty() {
            self.logger
                .debug(&format!("no listener for event ({})", event.name()));
            return Ok(());
        }

        for entry in snapshot {
            if entry.once && !self.claim(event.name(), entry.id) {
                continue;
            }
            entry.listener.listen(event).await?;
        }
        Ok(())
    }
}

impl Default for LocalMessageBus {
    fn default() -> Self {
        Self::new(&TracingLoggerFactory::new())
    }
}

#[async_trait]
impl MessageBus for LocalMessageBus {
    fn register_command_handler(&self, name: MessageName, handler: Arc<dyn CommandHandler>) {
        self.register("command handler", &name.clone(), |tables| {
            tables.commands.insert(name, handler);
        });
    }

    fn register_query_handler(&self, name: MessageName, handler: Arc<dyn QueryHandler>) {
        self.register("query handler", &name.clone(), |tables| {
            tables.queries.insert(name, handler);
        });
    }

    async fn execute(&self, command: &Command) -> BusResult<CommandOutcome> {
        let handler = self
            .read()
            .commands
            .get(command.name())
            .cloned()
            .ok_or_else(|| {
                BusError::handler_not_found(MessageKind::Command, command.name().clone())
            })?;

        self.logger
            .debug(&format!("executing command ({})", command.name()));
        let (mut result, events) = handler.handle(command).await?;
        result.correlate_with(command.message_id());
        self.publish(&events).await?;
        Ok((result, events))
    }

    async fn call(&self, query: &Query) -> BusResult<ResultMessage> {
        let handler = self
            .read()
            .queries
            .get(query.name())
            .cloned()
            .ok_or_else(|| BusError::handler_not_found(MessageKind::Query, query.name().clone()))?;

        self.logger.debug(&format!("calling query ({})", query.name()));
        let mut result = handler.handle(query).await?;
        result.correlate_with(query.message_id());
        Ok(result)
    }

    async fn publish(&self, events: &[Event]) -> BusResult<()> {
        for event in events {
            self.deliver(event).await?;
        }
        Ok(())
    }

    fn on(&self, name: MessageName, listener: Arc<dyn EventListener>) {
        self.add_listener(name, listener, false);
    }

    fn once(&self, name: MessageName, listener: Arc<dyn EventListener>) {
        self.add_listener(name, listener, true);
    }

    fn off(&self, name: Option<&MessageName>, listener: Option<&Arc<dyn EventListener>>) {
        let mut tables = self.write();
        match (name, listener) {
            (None, None) => tables.listeners.clear(),
            (Some(name), None) => {
                tables.listeners.remove(name);
            }
            (None, Some(listener)) => {
                for entries in tables.listeners.values_mut() {
                    entries.retain(|entry| !entry.is(listener));
                }
            }
            (Some(name), Some(listener)) => {
                if let Some(entries) = tables.listeners.get_mut(name) {
                    entries.retain(|entry| !entry.is(listener));
                }
            }
        }
        tables.listeners.retain(|_, entries| !entries.is_empty());
    }

    fn listener_count(&self, name: &MessageName) -> usize {
        self.read().listeners.get(name).map_or(0, Vec::len)
    }

    async fn dispose(&self) {
        {
            let mut tables = self.write();
            tables.commands.clear();
            tables.queries.clear();
            tables.listeners.clear();
            tables.disposed = true;
        }
        self.logger.debug("disposed");
    }
}

impl fmt::Debug for LocalMessageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.read();
        f.debug_struct("LocalMessageBus")
            .field("commands", &tables.commands.len())
            .field("queries", &tables.queries.len())
            .field("listeners", &tables.listeners.len())
            .field("disposed", &tables.disposed)
            .finish_non_exhaustive()
    }
}
