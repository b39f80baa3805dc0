//! Options attached to factory entries.

/// Options controlling how a factory entry produces its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactoryOptions {
    /// When `true`, the factory runs at most once and its value is cached.
    pub singleton: bool,
}

impl FactoryOptions {
    /// Options for a factory that runs on every resolution.
    #[must_use]
    pub const fn transient() -> Self {
        Self { singleton: false }
    }

    /// Options for a factory whose first value is cached.
    #[must_use]
    pub const fn singleton() -> Self {
        Self { singleton: true }
    }
}
