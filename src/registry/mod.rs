//! Keyed binding store for the objects managed by a container.
//!
//! A registry maps [`domain::RegistryKey`] values to an ordered list of
//! entries. Each entry is either a fixed value or a factory, and the most
//! recently registered entry always comes first:
//!
//! - [`ports::RegistryExt::resolve`] returns the head of the list
//! - [`ports::RegistryExt::resolve_all`] returns the whole list, head-first
//! - resolving a key that was never registered fails with
//!   [`error::RegistryError::KeyNotFound`]
//!
//! The module follows hexagonal architecture:
//!
//! - Key and option types in [`domain`]
//! - The object-safe [`ports::Registry`] contract and its typed extension
//! - The in-memory [`adapters::memory::DefaultRegistry`]
//!
//! # Example
//!
//! ```
//! use palladio::registry::adapters::memory::DefaultRegistry;
//! use palladio::registry::domain::RegistryKey;
//! use palladio::registry::ports::RegistryExt;
//!
//! let registry = DefaultRegistry::new();
//! let key = RegistryKey::new("app/Greeting");
//! registry.register_value(key.clone(), "hello").register_value(key.clone(), "bonjour");
//!
//! let greeting: &str = registry.resolve(&key).expect("registered key");
//! assert_eq!(greeting, "bonjour");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
