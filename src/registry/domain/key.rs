//! Namespaced registry keys.

use std::borrow::Cow;
use std::fmt;

/// Key identifying a bucket of registry entries.
///
/// Keys are plain namespaced strings such as `fwk/MessageBus`. Uniqueness is
/// an organisational property: well-known keys are declared once in [`keys`]
/// and shared by reference, so two modules naming the same key address the
/// same bucket.
///
/// # Examples
///
/// ```
/// use palladio::registry::domain::{RegistryKey, keys};
///
/// let key = RegistryKey::new("fwk/MessageBus");
/// assert_eq!(key, keys::MESSAGE_BUS);
/// assert_eq!(key.as_str(), "fwk/MessageBus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryKey(Cow<'static, str>);

impl RegistryKey {
    /// Creates a key from an owned or borrowed string.
    #[must_use]
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Creates a key from a static string, usable in `const` items.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RegistryKey {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for RegistryKey {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl AsRef<str> for RegistryKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Well-known keys read by the container during initialisation.
pub mod keys {
    use super::RegistryKey;

    /// The container itself, stored as a weak handle.
    pub const CONTAINER: RegistryKey = RegistryKey::from_static("fwk/Container");

    /// The main message bus.
    pub const MESSAGE_BUS: RegistryKey = RegistryKey::from_static("fwk/MessageBus");

    /// The main logger factory.
    pub const LOGGER_FACTORY: RegistryKey = RegistryKey::from_static("fwk/LoggerFactory");

    /// The main config provider.
    pub const CONFIG_PROVIDER: RegistryKey = RegistryKey::from_static("fwk/ConfigProvider");

    /// Command handler bindings discovered by the container.
    pub const COMMAND_HANDLER: RegistryKey = RegistryKey::from_static("fwk/CommandHandler");

    /// Query handler bindings discovered by the container.
    pub const QUERY_HANDLER: RegistryKey = RegistryKey::from_static("fwk/QueryHandler");

    /// Event listener bindings discovered by the container.
    pub const EVENT_LISTENER: RegistryKey = RegistryKey::from_static("fwk/EventListener");

    /// Components configured and disposed by the container.
    pub const COMPONENT: RegistryKey = RegistryKey::from_static("fwk/Component");
}
