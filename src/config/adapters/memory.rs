//! In-memory implementation of the `ConfigProvider` port.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::config::{
    Config, ConfigScope,
    error::ConfigResult,
    ports::ConfigProvider,
};

/// Configuration held in process memory.
///
/// # Examples
///
/// ```
/// use palladio::config::adapters::memory::InMemoryConfigProvider;
/// use palladio::config::ports::ConfigProvider;
/// use palladio::config::{Config, ConfigScope};
/// use serde_json::json;
///
/// let mut orders = Config::new();
/// orders.insert("currency".to_owned(), json!("EUR"));
/// let provider = InMemoryConfigProvider::new().with_scope("orders", orders);
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let config = provider.get(&ConfigScope::from("orders"), None).await.unwrap();
/// assert_eq!(config["currency"], json!("EUR"));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryConfigProvider {
    scopes: RwLock<HashMap<ConfigScope, Config>>,
}

impl InMemoryConfigProvider {
    /// Creates a provider without any scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a scope, replacing any document already stored for it.
    #[must_use]
    pub fn with_scope(self, scope: impl Into<ConfigScope>, config: Config) -> Self {
        self.scopes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scope.into(), config);
        self
    }
}

#[async_trait]
impl ConfigProvider for InMemoryConfigProvider {
    async fn get(&self, scope: &ConfigScope, default: Option<Config>) -> ConfigResult<Config> {
        let scopes = self.scopes.read().unwrap_or_else(PoisonError::into_inner);
        Ok(scopes
            .get(scope)
            .cloned()
            .or(default)
            .unwrap_or_default())
    }

    async fn patch(&self, scope: &ConfigScope, partial: Config) -> ConfigResult<()> {
        let mut scopes = self.scopes.write().unwrap_or_else(PoisonError::into_inner);
        scopes.entry(scope.clone()).or_default().extend(partial);
        Ok(())
    }
}
