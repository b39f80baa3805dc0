//! Logger adapter implementations.

pub mod tracing_logger;
