//! Port traits implemented by application modules and components.

mod component;
mod module;

pub use component::Component;
pub use module::{ConfigurableModule, Module, ModuleConfiguration};
