//! Configuration provider port.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    Config, ConfigScope,
    error::{ConfigError, ConfigResult},
};

/// Reads and updates scoped configuration.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Returns the configuration stored for `scope`.
    ///
    /// Falls back to `default`, then to an empty document, when nothing is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the backing store cannot be read.
    async fn get(&self, scope: &ConfigScope, default: Option<Config>) -> ConfigResult<Config>;

    /// Merges `partial` into the configuration of `scope`, key by key.
    ///
    /// The scope is created when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the backing store cannot be written.
    async fn patch(&self, scope: &ConfigScope, partial: Config) -> ConfigResult<()>;
}

/// Typed access on top of any [`ConfigProvider`].
#[async_trait]
pub trait ConfigProviderExt: ConfigProvider {
    /// Reads the configuration of `scope` as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when the document does not match
    /// `T`.
    async fn get_as<T>(&self, scope: &ConfigScope, default: Option<Config>) -> ConfigResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let config = self.get(scope, default).await?;
        serde_json::from_value(Value::Object(config)).map_err(|err| ConfigError::Deserialize {
            scope: scope.clone(),
            source: err.into(),
        })
    }

    /// Merges a serializable value into the configuration of `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::NotAnObject`]
    /// when `partial` does not serialize to a JSON object.
    async fn patch_with<T>(&self, scope: &ConfigScope, partial: &T) -> ConfigResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let value = serde_json::to_value(partial).map_err(|err| ConfigError::Serialize {
            scope: scope.clone(),
            source: err.into(),
        })?;
        let Value::Object(config) = value else {
            return Err(ConfigError::NotAnObject {
                scope: scope.clone(),
            });
        };
        self.patch(scope, config).await
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProviderExt for P {}
