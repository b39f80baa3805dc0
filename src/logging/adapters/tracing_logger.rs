//! Logger factory backed by `tracing`.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::logging::ports::{Logger, LoggerFactory};

const UNNAMED_CONTAINER: &str = "-";

/// Creates loggers that emit `tracing` events.
///
/// Every event carries a `logger` field with the joined logger names and a
/// `container` field with the owning container name, if any.
///
/// # Examples
///
/// ```
/// use palladio::logging::adapters::tracing_logger::TracingLoggerFactory;
/// use palladio::logging::ports::LoggerFactory;
///
/// let factory = TracingLoggerFactory::for_container("orders");
/// let logger = factory.create(&["OrderModule", "handlers"]);
/// logger.info("ready");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TracingLoggerFactory {
    container: Option<Arc<str>>,
}

impl TracingLoggerFactory {
    /// Creates a factory not attached to any container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose loggers are tagged with a container name.
    #[must_use]
    pub fn for_container(name: impl Into<Arc<str>>) -> Self {
        Self {
            container: Some(name.into()),
        }
    }

    /// Returns the container name attached to created loggers.
    #[must_use]
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn create(&self, names: &[&str]) -> Arc<dyn Logger> {
        Arc::new(TracingLogger {
            name: names.join("/"),
            container: self.container.clone(),
        })
    }
}

/// Logger created by [`TracingLoggerFactory`].
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
    container: Option<Arc<str>>,
}

impl TracingLogger {
    /// Returns the joined logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn container(&self) -> &str {
        self.container.as_deref().unwrap_or(UNNAMED_CONTAINER)
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!(logger = %self.name, container = %self.container(), "{message}");
    }

    fn info(&self, message: &str) {
        info!(logger = %self.name, container = %self.container(), "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(logger = %self.name, container = %self.container(), "{message}");
    }

    fn error(&self, message: &str) {
        error!(logger = %self.name, container = %self.container(), "{message}");
    }
}
