//! Commands, queries, events and the bus that routes them.
//!
//! # Architecture
//!
//! - **Domain**: message envelopes ([`domain::Command`], [`domain::Query`],
//!   [`domain::Event`]) and [`domain::ResultMessage`]
//! - **Ports**: handler traits and the [`ports::MessageBus`] trait
//! - **Adapters**: [`adapters::local::LocalMessageBus`]
//!
//! # Example
//!
//! ```
//! use palladio::message::adapters::local::LocalMessageBus;
//! use palladio::message::domain::{Event, Message, Query};
//! use palladio::message::error::BusError;
//! use palladio::message::ports::MessageBus;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let bus = LocalMessageBus::default();
//! bus.publish(&[Event::named("NobodyListens")]).await.expect("no-op publish");
//!
//! let err = bus.call(&Query::named("QueryA")).await.unwrap_err();
//! assert!(matches!(err, BusError::HandlerNotFound { .. }));
//! assert!(err.to_string().contains("QueryA"));
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
