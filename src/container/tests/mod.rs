//! Unit tests for the container module.
