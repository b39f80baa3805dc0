//! Unit tests for the message module.

mod support;
