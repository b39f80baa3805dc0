//! Scoped configuration read by modules and components.
//!
//! Configuration is a JSON object per scope. The container resolves its
//! provider under [`crate::registry::domain::keys::CONFIG_PROVIDER`]; the
//! in-process [`adapters::memory::InMemoryConfigProvider`] is bound by
//! [`crate::container::adapters::local::LocalInfrastructureModule`].

pub mod adapters;
pub mod error;
pub mod ports;
mod scope;

pub use scope::{Config, ConfigScope};

#[cfg(test)]
mod tests;
