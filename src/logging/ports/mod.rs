//! Logger ports.

use std::sync::Arc;

/// A logger displays messages for technical purposes.
pub trait Logger: Send + Sync {
    /// Appends a debug message.
    fn debug(&self, message: &str);

    /// Appends a general log message, recorded at the info level.
    fn log(&self, message: &str) {
        self.info(message);
    }

    /// Appends an info message.
    fn info(&self, message: &str);

    /// Appends a warning message.
    fn warn(&self, message: &str);

    /// Appends an error message.
    fn error(&self, message: &str);
}

/// Creates loggers.
pub trait LoggerFactory: Send + Sync {
    /// Creates a logger identified by a set of names.
    fn create(&self, names: &[&str]) -> Arc<dyn Logger>;
}
