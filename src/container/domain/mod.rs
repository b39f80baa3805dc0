//! Container value types: handler bindings and lifecycle state.

mod bindings;
mod state;

pub use bindings::{CommandHandlerBinding, EventListenerBinding, QueryHandlerBinding};
pub use state::ContainerState;
