//! Port contracts for registries.

mod registry;

pub use registry::{ErasedFactory, ErasedValue, Registry, RegistryExt};
