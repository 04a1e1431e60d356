//! Shared fixtures and assertions for integration tests.

pub mod chain_assertions;
