//! Container services: the container, its builder and the module binder.

mod binder;
mod builder;
mod container;

pub use binder::Binder;
pub use builder::ContainerBuilder;
pub use container::Container;
