//! Configure identifier parsing and proposals.
//!
//! `ParserOptions` controls the default-value suffix, whether policy types
//! expose the attributes of their product type, the placeholders used in
//! index and qualifier proposals, and an optional proposal limit.
//!
//! ## Examples
//! ```
//! # use formula_ident::identifier::ParserOptions;
//! let options = ParserOptions::default()
//!     .with_default_value_suffix("@std")
//!     .with_max_proposals(20);
//! assert_eq!(options.default_value_suffix.as_str(), "@std");
//! assert!(options.product_attributes);
//! ```

use crate::base::Name;

/// Options for [`IdentifierParser`](super::IdentifierParser).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Suffix switching an attribute to its default value, e.g. `premium@default`.
    pub default_value_suffix: Name,
    /// Let policy types expose the attributes of their configuring product type.
    pub product_attributes: bool,
    /// Appended to an association name in index proposals.
    pub index_placeholder: Name,
    /// Appended to an association name in qualifier proposals.
    pub qualifier_placeholder: Name,
    /// Maximum number of proposals returned, after sorting.
    pub max_proposals: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            default_value_suffix: Name::new_static("@default"),
            product_attributes: true,
            index_placeholder: Name::new_static("[0]"),
            qualifier_placeholder: Name::new_static("[\"\"]"),
            max_proposals: None,
        }
    }
}

impl ParserOptions {
    pub fn with_default_value_suffix(mut self, suffix: impl Into<Name>) -> Self {
        self.default_value_suffix = suffix.into();
        self
    }

    pub fn with_product_attributes(mut self, enabled: bool) -> Self {
        self.product_attributes = enabled;
        self
    }

    pub fn with_index_placeholder(mut self, placeholder: impl Into<Name>) -> Self {
        self.index_placeholder = placeholder.into();
        self
    }

    pub fn with_qualifier_placeholder(mut self, placeholder: impl Into<Name>) -> Self {
        self.qualifier_placeholder = placeholder.into();
        self
    }

    pub fn with_max_proposals(mut self, max: usize) -> Self {
        self.max_proposals = Some(max);
        self
    }

    /// Split a trailing default-value suffix off an attribute name.
    pub fn strip_default_suffix<'a>(&self, name: &'a str) -> (&'a str, bool) {
        if self.default_value_suffix.is_empty() {
            return (name, false);
        }
        match name.strip_suffix(self.default_value_suffix.as_str()) {
            Some(base) => (base, true),
            None => (name, false),
        }
    }
}

/// Errors loading options.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("Invalid parser options: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "serde")]
impl ParserOptions {
    /// Load options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options = serde_json::from_str(json)?;
        tracing::debug!("[IDENT] loaded parser options: {:?}", options);
        Ok(options)
    }
}
