//! Logger contracts consumed by the container and the message bus.
//!
//! The logging backend is a collaborator: the core only needs a
//! [`ports::LoggerFactory`] bound under
//! [`crate::registry::domain::keys::LOGGER_FACTORY`]. The default adapter,
//! [`adapters::tracing_logger::TracingLoggerFactory`], forwards every line to
//! `tracing`.

pub mod adapters;
pub mod ports;
