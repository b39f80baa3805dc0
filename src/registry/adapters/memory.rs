//! In-memory registry.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::trace;

use crate::registry::{
    domain::{FactoryOptions, RegistryKey},
    error::{RegistryError, RegistryResult},
    ports::{ErasedFactory, ErasedValue, Registry},
};

/// Thread-safe in-memory registry.
///
/// Buckets are kept most-recent-first. Lookups copy the entries they need out
/// of the table before running any factory, so factories may resolve other
/// keys from the same registry.
#[derive(Default)]
pub struct DefaultRegistry {
    entries: RwLock<HashMap<RegistryKey, VecDeque<Entry>>>,
}

#[derive(Clone)]
enum Entry {
    Value(ErasedValue),
    Factory(Arc<FactoryEntry>),
}

struct FactoryEntry {
    factory: ErasedFactory,
    options: FactoryOptions,
    cached: Mutex<Option<ErasedValue>>,
}

impl FactoryEntry {
    fn get(&self, registry: &dyn Registry) -> RegistryResult<ErasedValue> {
        if !self.options.singleton {
            return (self.factory)(registry);
        }

        // Held while the factory runs: concurrent resolutions block until the
        // first value is cached.
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = cached.as_ref() {
            return Ok(Arc::clone(value));
        }
        let value = (self.factory)(registry)?;
        *cached = Some(Arc::clone(&value));
        Ok(value)
    }
}

impl Entry {
    fn get(&self, registry: &dyn Registry) -> RegistryResult<ErasedValue> {
        match self {
            Self::Value(value) => Ok(Arc::clone(value)),
            Self::Factory(factory) => factory.get(registry),
        }
    }
}

impl DefaultRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry behind an [`Arc`], ready to share.
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn push_front(&self, key: RegistryKey, entry: Entry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_default().push_front(entry);
    }

    fn bucket(&self, key: &RegistryKey) -> RegistryResult<VecDeque<Entry>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned().ok_or_else(|| {
            trace!(key = %key, "registry key not found");
            RegistryError::KeyNotFound(key.clone())
        })
    }
}

impl Registry for DefaultRegistry {
    fn register_erased_value(&self, key: RegistryKey, value: ErasedValue) {
        self.push_front(key, Entry::Value(value));
    }

    fn register_erased_factory(
        &self,
        key: RegistryKey,
        factory: ErasedFactory,
        options: FactoryOptions,
    ) {
        let entry = FactoryEntry {
            factory,
            options,
            cached: Mutex::new(None),
        };
        self.push_front(key, Entry::Factory(Arc::new(entry)));
    }

    fn resolve_erased(&self, key: &RegistryKey) -> RegistryResult<ErasedValue> {
        let head = self
            .bucket(key)?
            .pop_front()
            .ok_or_else(|| RegistryError::KeyNotFound(key.clone()))?;
        head.get(self)
    }

    fn resolve_all_erased(&self, key: &RegistryKey) -> RegistryResult<Vec<ErasedValue>> {
        self.bucket(key)?
            .iter()
            .map(|entry| entry.get(self))
            .collect()
    }

    fn contains(&self, key: &RegistryKey) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).is_some_and(|bucket| !bucket.is_empty())
    }
}

impl fmt::Debug for DefaultRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<_> = entries
            .iter()
            .map(|(key, bucket)| (key.as_str().to_owned(), bucket.len()))
            .collect();
        keys.sort();
        f.debug_struct("DefaultRegistry")
            .field("entries", &keys)
            .finish()
    }
}
