//! Dependency injection container and its lifecycle.
//!
//! A [`services::Container`] owns a registry and an ordered list of
//! [`ports::Module`]s. On initialization each module fills the registry;
//! the container then checks the main services are bound, wires every
//! discovered handler binding to the main message bus and configures the
//! [`ports::Component`]s. Disposal walks the same path backwards.
//!
//! # Architecture
//!
//! - **Domain**: handler bindings and [`domain::ContainerState`]
//! - **Ports**: [`ports::Module`], [`ports::ConfigurableModule`] and
//!   [`ports::Component`]
//! - **Services**: [`services::Container`], [`services::ContainerBuilder`]
//!   and [`services::Binder`]
//! - **Adapters**: ready-made modules such as
//!   [`adapters::LocalInfrastructureModule`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
