//! Datatypes as seen by the identifier resolver.

use std::fmt;

use crate::base::Name;

/// The resolved type of an identifier prefix.
///
/// `ListOf` marks a path that crossed a to-many relationship. Wrapping is
/// idempotent: a list is never wrapped again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datatype {
    /// A plain value datatype (`Money`, `String`, `Integer`, ...).
    Value(Name),
    /// A structural policy type with attributes and associations.
    Policy(Name),
    /// A product type (configures a policy type).
    Product(Name),
    /// A value of an enumeration type.
    Enum(Name),
    /// The enumeration type itself, as referenced by its name in a formula.
    EnumClass(Name),
    /// List of the element type.
    ListOf(Box<Datatype>),
}

impl Datatype {
    pub fn value(name: impl Into<Name>) -> Self {
        Datatype::Value(name.into())
    }

    pub fn policy(name: impl Into<Name>) -> Self {
        Datatype::Policy(name.into())
    }

    pub fn product(name: impl Into<Name>) -> Self {
        Datatype::Product(name.into())
    }

    /// Wrap in a list unless already a list.
    pub fn list_of(self) -> Self {
        if self.is_list() {
            self
        } else {
            Datatype::ListOf(Box::new(self))
        }
    }

    /// Wrap in a list when `many` is set.
    pub fn list_if(self, many: bool) -> Self {
        if many { self.list_of() } else { self }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Datatype::ListOf(_))
    }

    /// The element type of a list, or the type itself.
    pub fn element(&self) -> &Datatype {
        match self {
            Datatype::ListOf(inner) => inner.element(),
            other => other,
        }
    }

    /// Consume a list layer, returning the element type.
    pub fn into_element(self) -> Datatype {
        match self {
            Datatype::ListOf(inner) => inner.into_element(),
            other => other,
        }
    }

    /// Types that own attributes and associations.
    pub fn is_structural(&self) -> bool {
        matches!(self, Datatype::Policy(_) | Datatype::Product(_))
    }

    /// Name of the (element) type.
    pub fn name(&self) -> &str {
        match self {
            Datatype::Value(name)
            | Datatype::Policy(name)
            | Datatype::Product(name)
            | Datatype::Enum(name)
            | Datatype::EnumClass(name) => name,
            Datatype::ListOf(inner) => inner.name(),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datatype::ListOf(inner) => write!(f, "List<{inner}>"),
            other => f.write_str(other.name()),
        }
    }
}
