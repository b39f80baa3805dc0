//! Registry port and its typed extension.

use crate::registry::{
    domain::{FactoryOptions, RegistryKey},
    error::{RegistryError, RegistryResult},
};
use std::any::{Any, type_name};
use std::sync::Arc;

/// A type-erased registry value.
pub type ErasedValue = Arc<dyn Any + Send + Sync>;

/// A type-erased factory. It receives the registry it resolves from.
pub type ErasedFactory = Arc<dyn Fn(&dyn Registry) -> RegistryResult<ErasedValue> + Send + Sync>;

/// Object-safe registry contract.
///
/// Implementations store values behind [`ErasedValue`] so a single registry
/// can hold bindings of any type. Callers normally go through
/// [`RegistryExt`], which adds typed registration and resolution on top of
/// these methods.
pub trait Registry: Send + Sync {
    /// Inserts a value entry at the head of the bucket for `key`.
    ///
    /// Earlier entries under the same key are shadowed, not replaced.
    fn register_erased_value(&self, key: RegistryKey, value: ErasedValue);

    /// Inserts a factory entry at the head of the bucket for `key`.
    fn register_erased_factory(
        &self,
        key: RegistryKey,
        factory: ErasedFactory,
        options: FactoryOptions,
    );

    /// Resolves the head entry of the bucket for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] when the key was never
    /// registered, or the error raised by a failing factory.
    fn resolve_erased(&self, key: &RegistryKey) -> RegistryResult<ErasedValue>;

    /// Resolves every entry of the bucket for `key`, head-first.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] when the key was never
    /// registered, or the error raised by a failing factory.
    fn resolve_all_erased(&self, key: &RegistryKey) -> RegistryResult<Vec<ErasedValue>>;

    /// Returns `true` when at least one entry exists for `key`.
    fn contains(&self, key: &RegistryKey) -> bool;
}

/// Typed registration and resolution for every [`Registry`].
///
/// Values are resolved by clone, so bindings are usually shared handles such
/// as `Arc<dyn MessageBus>`.
pub trait RegistryExt: Registry {
    /// Registers a fixed value under `key`.
    fn register_value<T>(&self, key: RegistryKey, value: T) -> &Self
    where
        T: Send + Sync + 'static,
    {
        self.register_erased_value(key, Arc::new(value));
        self
    }

    /// Registers a factory under `key`.
    ///
    /// The factory receives the registry so it can resolve its own
    /// collaborators.
    fn register_factory<T, F>(&self, key: RegistryKey, factory: F, options: FactoryOptions) -> &Self
    where
        T: Send + Sync + 'static,
        F: Fn(&dyn Registry) -> RegistryResult<T> + Send + Sync + 'static,
    {
        let erased: ErasedFactory = Arc::new(move |registry: &dyn Registry| {
            factory(registry).map(|value| Arc::new(value) as ErasedValue)
        });
        self.register_erased_factory(key, erased, options);
        self
    }

    /// Resolves the head entry under `key` as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for unknown keys and
    /// [`RegistryError::TypeMismatch`] when the entry holds another type.
    fn resolve<T>(&self, key: &RegistryKey) -> RegistryResult<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let value = self.resolve_erased(key)?;
        downcast(key, &value)
    }

    /// Resolves every entry under `key` as a `T`, head-first.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for unknown keys and
    /// [`RegistryError::TypeMismatch`] when any entry holds another type.
    fn resolve_all<T>(&self, key: &RegistryKey) -> RegistryResult<Vec<T>>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.resolve_all_erased(key)?
            .iter()
            .map(|value| downcast(key, value))
            .collect()
    }
}

impl<R: Registry + ?Sized> RegistryExt for R {}

fn downcast<T>(key: &RegistryKey, value: &ErasedValue) -> RegistryResult<T>
where
    T: Clone + Send + Sync + 'static,
{
    value
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| RegistryError::TypeMismatch {
            key: key.clone(),
            expected: type_name::<T>(),
        })
}
