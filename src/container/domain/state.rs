//! Container lifecycle state.

use std::fmt;

/// Lifecycle state of a [`crate::container::services::Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerState {
    /// Built but not initialized yet.
    Uninitialized,
    /// Initialization is in progress.
    Initializing,
    /// Modules initialized, handlers registered and components configured.
    Initialized,
    /// Initialization stopped on an error. The container can still be
    /// disposed.
    Failed,
    /// Disposal is in progress.
    Disposing,
    /// Disposed. Terminal.
    Disposed,
}

impl ContainerState {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Initialized => "initialized",
            Self::Failed => "failed",
            Self::Disposing => "disposing",
            Self::Disposed => "disposed",
        }
    }

    /// Returns `true` when `dispose` may run from this state.
    #[must_use]
    pub const fn is_disposable(self) -> bool {
        matches!(self, Self::Initialized | Self::Failed)
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
