//! Message bus port.

use std::sync::Arc;

use async_trait::async_trait;

use super::{CommandHandler, CommandOutcome, EventListener, QueryHandler};
use crate::message::{
    domain::{Command, Event, MessageName, Query, ResultMessage},
    error::BusResult,
};

/// Routes commands and queries to their handler and fans events out to
/// listeners.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Registering a handler under a name replaces the previous handler
/// - Results returned by `execute` and `call` are correlated with the request
/// - Events are delivered in the supplied order, each to its listeners in
///   registration order, one at a time
/// - A listener registered with `once` is delivered at most one event
/// - Registrations made after `dispose` have no effect
#[async_trait]
pub trait MessageBus: Send + Sync {
    /// Registers the handler for a command name, replacing any previous one.
    fn register_command_handler(&self, name: MessageName, handler: Arc<dyn CommandHandler>);

    /// Registers the handler for a query name, replacing any previous one.
    fn register_query_handler(&self, name: MessageName, handler: Arc<dyn QueryHandler>);

    /// Dispatches a command, then publishes the events it produced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::message::error::BusError::HandlerNotFound`] when no
    /// handler is registered for the command name. Handler and listener
    /// errors are propagated unchanged.
    async fn execute(&self, command: &Command) -> BusResult<CommandOutcome>;

    /// Dispatches a query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::message::error::BusError::HandlerNotFound`] when no
    /// handler is registered for the query name. Handler errors are
    /// propagated unchanged.
    async fn call(&self, query: &Query) -> BusResult<ResultMessage>;

    /// Delivers events to their listeners.
    ///
    /// # Errors
    ///
    /// Returns the first listener error; the remaining deliveries are skipped.
    async fn publish(&self, events: &[Event]) -> BusResult<()>;

    /// Adds a listener for an event name.
    fn on(&self, name: MessageName, listener: Arc<dyn EventListener>);

    /// Adds a listener that is removed before its first delivery.
    fn once(&self, name: MessageName, listener: Arc<dyn EventListener>);

    /// Removes listeners.
    ///
    /// | `name` | `listener` | removes                                   |
    /// |--------|------------|-------------------------------------------|
    /// | none   | none       | every listener                            |
    /// | some   | none       | every listener of the name                |
    /// | none   | some       | the listener under every name             |
    /// | some   | some       | the listener under the name               |
    ///
    /// Listeners are compared by pointer identity.
    fn off(&self, name: Option<&MessageName>, listener: Option<&Arc<dyn EventListener>>);

    /// Returns the number of listeners registered for an event name.
    fn listener_count(&self, name: &MessageName) -> usize;

    /// Clears every table and stops accepting registrations.
    async fn dispose(&self);
}
