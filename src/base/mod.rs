//! Foundation types for the identifier resolver.
//!
//! This module provides:
//! - [`TextRegion`] - Byte regions of identifier parts
//! - [`Name`] - Cheap-to-clone names for model elements
//!
//! This module has NO dependencies on other crate modules.

mod region;

pub use region::TextRegion;

/// Name of a model element (type, attribute, association, parameter, ...).
pub type Name = smol_str::SmolStr;

// Re-export text-size types for convenience
pub use text_size;
