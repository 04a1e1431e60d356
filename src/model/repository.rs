//! Read-only collaborator interfaces consumed by the resolver.

use rustc_hash::FxHashSet;

use super::datatype::Datatype;
use super::elements::{Association, Attribute, EnumType, ModelElement, ProductComponent};
use crate::base::Name;

/// Query interface over an immutable snapshot of the type model.
pub trait ModelRepository {
    /// Resolve a qualified datatype name.
    fn find_datatype(&self, qualified_name: &str) -> Option<Datatype>;

    /// Declared and inherited attributes of a structural type, subtype first.
    fn attributes(&self, type_name: &str) -> Vec<&Attribute>;

    /// Declared and inherited associations of a structural type, subtype first.
    fn associations(&self, type_name: &str) -> Vec<&Association>;

    /// The product type configuring a policy type.
    fn product_type_of(&self, policy_type: &str) -> Option<Name>;

    /// The policy type configured by a product type.
    fn policy_type_of(&self, product_type: &str) -> Option<Name>;

    /// All catalog instances.
    fn product_components(&self) -> Vec<&ProductComponent>;

    /// True if `sub_type` is `super_type` or one of its subtypes.
    fn is_same_or_subtype(&self, sub_type: &str, super_type: &str) -> bool;

    fn enum_type(&self, name: &str) -> Option<&EnumType>;
}

/// How an identifier refers to an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentifierKind {
    /// Plain attribute access.
    Attribute,
    /// Access to the attribute's default value.
    DefaultIdentifier,
}

/// Allow/deny policy applied to attributes before they can be referenced.
pub trait IdentifierFilter {
    fn is_identifier_allowed(&self, element: ModelElement<'_>, kind: IdentifierKind) -> bool;
}

/// Filter that allows everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl IdentifierFilter for AllowAll {
    fn is_identifier_allowed(&self, _element: ModelElement<'_>, _kind: IdentifierKind) -> bool {
        true
    }
}

/// Filter denying specific `(element key, kind)` pairs.
///
/// Keys follow [`ModelElement::key`], e.g. `Policy.premium`.
#[derive(Clone, Debug, Default)]
pub struct DenyListFilter {
    denied: FxHashSet<(String, IdentifierKind)>,
}

impl DenyListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny(mut self, key: impl Into<String>, kind: IdentifierKind) -> Self {
        self.denied.insert((key.into(), kind));
        self
    }
}

impl IdentifierFilter for DenyListFilter {
    fn is_identifier_allowed(&self, element: ModelElement<'_>, kind: IdentifierKind) -> bool {
        !self.denied.contains(&(element.key(), kind))
    }
}

/// Per-element label and description lookup.
///
/// The provided methods read the texts stored on the elements; hosts with a
/// real multi-language setup override them.
pub trait Localizer {
    fn label(&self, element: ModelElement<'_>) -> Option<String> {
        element.label().map(str::to_string)
    }

    fn description(&self, element: ModelElement<'_>) -> Option<String> {
        element.description().map(str::to_string)
    }
}

/// Uses the texts stored on the elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementTexts;

impl Localizer for ElementTexts {}
