//! Handler and listener ports.

use async_trait::async_trait;

use crate::message::{
    domain::{Command, Event, Query, ResultMessage},
    error::BusResult,
};

/// What a command handler produces: the result and the events to publish.
pub type CommandOutcome = (ResultMessage, Vec<Event>);

/// Handles commands routed to it by name.
///
/// A handler may be registered under several names; it receives the full
/// command so it can tell them apart.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles a command.
    ///
    /// The returned events are published by the bus before it returns the
    /// result to the caller.
    ///
    /// # Errors
    ///
    /// Any error is propagated unchanged to the caller of
    /// [`super::MessageBus::execute`].
    async fn handle(&self, command: &Command) -> BusResult<CommandOutcome>;
}

/// Handles queries routed to it by name.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    /// Handles a query.
    ///
    /// # Errors
    ///
    /// Any error is propagated unchanged to the caller of
    /// [`super::MessageBus::call`].
    async fn handle(&self, query: &Query) -> BusResult<ResultMessage>;
}

/// Receives published events.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Reacts to an event.
    ///
    /// # Errors
    ///
    /// An error stops delivery of the current publish and is returned to the
    /// publisher.
    async fn listen(&self, event: &Event) -> BusResult<()>;
}
