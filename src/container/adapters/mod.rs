//! Ready-made modules.
//!
//! - [`Configured`]: turns a [`crate::container::ports::ConfigurableModule`]
//!   into a module
//! - [`FnModule`]: a module from a closure
//! - [`AsyncFnModule`]: a module from an async closure
//! - [`LocalInfrastructureModule`]: binds an in-process bus, a `tracing`
//!   logger factory and an in-memory config provider

pub mod configured;
pub mod fn_module;
pub mod local;

pub use configured::Configured;
pub use fn_module::{AsyncFnModule, FnModule};
pub use local::LocalInfrastructureModule;
