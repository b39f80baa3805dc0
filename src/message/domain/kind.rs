//! Message kind discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of message kinds exchanged on a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A request for a state-changing action, handled by exactly one handler.
    Command,
    /// A request for data, handled by exactly one handler.
    Query,
    /// A notification delivered to zero or more listeners.
    Event,
    /// The response to a command or a query.
    Result,
}

impl MessageKind {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Query => "query",
            Self::Event => "event",
            Self::Result => "result",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
