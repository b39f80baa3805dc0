//! Message bus adapters.
//!
//! - [`local::LocalMessageBus`]: in-process bus dispatching on the caller's
//!   task

pub mod local;
