//! Port trait definitions for the message subsystem.
//!
//! Handlers and listeners are implemented by application code; the bus port
//! is implemented by adapters such as
//! [`crate::message::adapters::local::LocalMessageBus`].

mod bus;
mod handler;

pub use bus::MessageBus;
pub use handler::{CommandHandler, CommandOutcome, EventListener, QueryHandler};
