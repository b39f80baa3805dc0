//! Configuration provider adapters.

pub mod memory;
