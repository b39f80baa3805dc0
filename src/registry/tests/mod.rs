//! Unit tests for the registry module.
