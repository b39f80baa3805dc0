//! Domain types for registry keys and factory options.

mod key;
mod options;

pub use key::{RegistryKey, keys};
pub use options::FactoryOptions;
