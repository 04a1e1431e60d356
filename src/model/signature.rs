//! The signature of the formula an identifier is typed into.

use super::elements::{Attribute, Parameter};
use crate::base::Name;

/// Everything the formula itself contributes to identifier resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaSignature {
    pub name: Name,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// The type owning the formula; the context type at the root.
    pub formula_type: Option<Name>,
    /// Class-level attributes the formula declares as matching its type.
    pub matching_attributes: Vec<Attribute>,
    /// Enumeration types usable in the formula.
    pub enum_types: Vec<Name>,
}

impl FormulaSignature {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_formula_type(mut self, formula_type: impl Into<Name>) -> Self {
        self.formula_type = Some(formula_type.into());
        self
    }

    pub fn with_matching_attribute(mut self, attribute: Attribute) -> Self {
        self.matching_attributes.push(attribute);
        self
    }

    pub fn with_enum_type(mut self, enum_type: impl Into<Name>) -> Self {
        self.enum_types.push(enum_type.into());
        self
    }

    /// First parameter with exactly this name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
