//! Palladio: in-process dependency registry, message bus and container
//! lifecycle.
//!
//! This crate provides the plumbing of a modular application: a keyed
//! registry of managed objects, a bus routing commands, queries and events
//! between bounded contexts, and a container that wires both together from
//! a list of modules.
//!
//! # Architecture
//!
//! Palladio follows hexagonal architecture principles:
//!
//! - **Domain**: Plain value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces implemented by applications and
//!   adapters
//! - **Adapters**: Concrete in-process implementations of ports
//!
//! # Modules
//!
//! - [`registry`]: Keyed values and factories, most recent first
//! - [`message`]: Command, query and event envelopes and the message bus
//! - [`container`]: Modules, components and the container lifecycle
//! - [`logging`]: Logger contracts and the `tracing` adapter
//! - [`config`]: Scoped configuration contracts and the in-memory adapter

pub mod config;
pub mod container;
pub mod logging;
pub mod message;
pub mod registry;
