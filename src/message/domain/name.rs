//! Routing names shared by every instance of a message kind.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Stable routing name of a message kind, e.g. `CreateOrder`.
///
/// Commands and queries are routed to exactly one handler by name; events
/// are fanned out to every listener registered under their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageName(Cow<'static, str>);

impl MessageName {
    /// Creates a message name.
    #[must_use]
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Creates a message name from a static string, usable in `const` items.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for MessageName {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for MessageName {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<&MessageName> for MessageName {
    fn from(value: &MessageName) -> Self {
        value.clone()
    }
}

impl AsRef<str> for MessageName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for MessageName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for MessageName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
