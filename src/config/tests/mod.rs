//! Unit tests for the configuration module.
