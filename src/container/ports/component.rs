//! Component port.

use async_trait::async_trait;

use crate::container::error::ContainerResult;

/// A managed object that follows the container lifecycle.
///
/// Components are configured once every handler is wired to the bus, which
/// makes them a good place to glue bounded contexts together. They are
/// disposed before the modules, in reverse configuration order.
#[async_trait]
pub trait Component: Send + Sync {
    /// Configures the component. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Any error aborts the container initialization.
    async fn configure(&self) -> ContainerResult<()> {
        Ok(())
    }

    /// Releases the component. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Errors are collected by the container; the teardown continues.
    async fn dispose(&self) -> ContainerResult<()> {
        Ok(())
    }
}
