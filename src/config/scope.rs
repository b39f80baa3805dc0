//! Configuration scopes and documents.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A configuration document: a JSON object.
pub type Config = serde_json::Map<String, serde_json::Value>;

/// Name of a configuration section, e.g. `orders` or `mailer/smtp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigScope(Cow<'static, str>);

impl ConfigScope {
    /// Creates a scope.
    #[must_use]
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Returns the scope as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ConfigScope {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
