//! Identifier resolution tests
//!
//! Tests for:
//! - Parsing identifiers into node chains
//! - List semantics across to-many associations, qualifiers and indices
//! - Completion proposals and their ordering
//! - Structural properties of matcher parts and node regions

pub mod tests_properties;
pub mod tests_proposals;
