//! Model elements referenced by identifier nodes.
//!
//! These are snapshots handed out by a [`ModelRepository`](super::ModelRepository);
//! the resolver never mutates them.

use crate::base::Name;

/// A formula parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: Name,
    /// Qualified name of the declared datatype, if any.
    pub datatype: Option<Name>,
    pub label: Option<Name>,
    pub description: Option<Name>,
}

impl Parameter {
    pub fn new(name: impl Into<Name>, datatype: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            datatype: Some(datatype.into()),
            label: None,
            description: None,
        }
    }

    /// A parameter whose datatype was never declared.
    pub fn untyped(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            datatype: None,
            label: None,
            description: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<Name>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Name>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An attribute of a policy or product type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: Name,
    /// Name of the declaring type.
    pub owner: Name,
    /// Qualified name of the datatype.
    pub datatype: Name,
    /// Whether `name@default` style access to the default value is supported.
    pub default_value_access: bool,
    pub label: Option<Name>,
    pub description: Option<Name>,
}

impl Attribute {
    pub fn new(name: impl Into<Name>, datatype: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            owner: Name::default(),
            datatype: datatype.into(),
            default_value_access: false,
            label: None,
            description: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<Name>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_default_value_access(mut self) -> Self {
        self.default_value_access = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<Name>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Name>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Unbounded maximum cardinality (`*`).
pub const MANY: u32 = u32::MAX;

/// An association from a structural type to its target type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Association {
    pub name: Name,
    pub owner: Name,
    /// Qualified name of the target type.
    pub target: Name,
    /// Maximum cardinality; per qualifier when the association is qualified.
    pub max_cardinality: u32,
    pub qualified: bool,
    pub label: Option<Name>,
    pub description: Option<Name>,
}

impl Association {
    /// A to-one association.
    pub fn new(name: impl Into<Name>, target: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            owner: Name::default(),
            target: target.into(),
            max_cardinality: 1,
            qualified: false,
            label: None,
            description: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<Name>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_max_cardinality(mut self, max: u32) -> Self {
        self.max_cardinality = max;
        self
    }

    pub fn to_many(self) -> Self {
        self.with_max_cardinality(MANY)
    }

    pub fn qualified(mut self) -> Self {
        self.qualified = true;
        self
    }

    pub fn with_label(mut self, label: impl Into<Name>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Name>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// To-many as observed after qualification.
    pub fn is_one_to_many(&self) -> bool {
        self.max_cardinality > 1
    }

    /// To-many when the qualifier is ignored. Qualified associations always are.
    pub fn is_one_to_many_ignoring_qualifier(&self) -> bool {
        self.qualified || self.is_one_to_many()
    }

    pub fn is_qualified(&self) -> bool {
        self.qualified
    }
}

/// A catalog instance of a product type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductComponent {
    /// Exposed name used by qualifiers.
    pub name: Name,
    /// Persisted key, e.g. `products.BasicCoverage 2024-01`.
    pub qualified_name: Name,
    /// Public identifier, if one could be determined.
    pub runtime_id: Option<Name>,
    pub product_type: Name,
    pub description: Option<Name>,
}

impl ProductComponent {
    pub fn new(name: impl Into<Name>, product_type: impl Into<Name>) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            runtime_id: None,
            name,
            product_type: product_type.into(),
            description: None,
        }
    }

    pub fn with_qualified_name(mut self, qualified_name: impl Into<Name>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    pub fn with_runtime_id(mut self, runtime_id: impl Into<Name>) -> Self {
        self.runtime_id = Some(runtime_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<Name>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An enumeration type usable in formulas.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumType {
    pub name: Name,
    pub values: Vec<EnumValue>,
    pub description: Option<Name>,
}

impl EnumType {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            description: None,
        }
    }

    pub fn with_value(mut self, id: impl Into<Name>, name: impl Into<Name>) -> Self {
        self.values.push(EnumValue {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_description(mut self, description: impl Into<Name>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// First value whose identifier matches exactly.
    pub fn value(&self, id: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.id == id)
    }
}

/// A value of an enumeration type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumValue {
    /// Identifier used in formulas.
    pub id: Name,
    /// Display name.
    pub name: Name,
}

/// Borrowed view of any element, used by filters and localization.
#[derive(Clone, Copy, Debug)]
pub enum ModelElement<'a> {
    Parameter(&'a Parameter),
    Attribute(&'a Attribute),
    Association(&'a Association),
    ProductComponent(&'a ProductComponent),
    EnumType(&'a EnumType),
    EnumValue(&'a EnumType, &'a EnumValue),
}

impl ModelElement<'_> {
    pub fn name(&self) -> &str {
        match self {
            ModelElement::Parameter(p) => &p.name,
            ModelElement::Attribute(a) => &a.name,
            ModelElement::Association(a) => &a.name,
            ModelElement::ProductComponent(pc) => &pc.name,
            ModelElement::EnumType(e) => &e.name,
            ModelElement::EnumValue(_, v) => &v.id,
        }
    }

    /// Stable key: `Owner.name` for type members, the plain name otherwise.
    pub fn key(&self) -> String {
        match self {
            ModelElement::Attribute(a) if !a.owner.is_empty() => format!("{}.{}", a.owner, a.name),
            ModelElement::Association(a) if !a.owner.is_empty() => {
                format!("{}.{}", a.owner, a.name)
            }
            ModelElement::ProductComponent(pc) => pc.qualified_name.to_string(),
            ModelElement::EnumValue(e, v) => format!("{}.{}", e.name, v.id),
            other => other.name().to_string(),
        }
    }

    /// Label stored on the element itself.
    pub fn label(&self) -> Option<&str> {
        match self {
            ModelElement::Parameter(p) => p.label.as_deref(),
            ModelElement::Attribute(a) => a.label.as_deref(),
            ModelElement::Association(a) => a.label.as_deref(),
            ModelElement::EnumValue(_, v) => Some(&v.name),
            ModelElement::ProductComponent(_) | ModelElement::EnumType(_) => None,
        }
    }

    /// Description stored on the element itself.
    pub fn description(&self) -> Option<&str> {
        match self {
            ModelElement::Parameter(p) => p.description.as_deref(),
            ModelElement::Attribute(a) => a.description.as_deref(),
            ModelElement::Association(a) => a.description.as_deref(),
            ModelElement::ProductComponent(pc) => pc.description.as_deref(),
            ModelElement::EnumType(e) => e.description.as_deref(),
            ModelElement::EnumValue(..) => None,
        }
    }
}
