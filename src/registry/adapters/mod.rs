//! Registry adapter implementations.

pub mod memory;
