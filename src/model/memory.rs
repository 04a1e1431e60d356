//! In-memory model repository.
//!
//! A snapshot of types, enumerations and catalog instances held in
//! insertion-ordered maps. Hosts that already own a model implement
//! [`ModelRepository`] directly; this one backs tests and small tools.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;

use super::datatype::Datatype;
use super::elements::{Association, Attribute, EnumType, ProductComponent};
use super::repository::ModelRepository;
use crate::base::Name;

/// Kind of a structural type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Policy,
    Product,
}

/// A policy or product type with its declared members.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelType {
    pub name: Name,
    pub kind: TypeKind,
    pub supertype: Option<Name>,
    /// Policy types: configuring product type. Product types: configured policy type.
    pub counterpart: Option<Name>,
    pub attributes: Vec<Attribute>,
    pub associations: Vec<Association>,
}

impl ModelType {
    pub fn policy(name: impl Into<Name>) -> Self {
        Self::new(name, TypeKind::Policy)
    }

    pub fn product(name: impl Into<Name>) -> Self {
        Self::new(name, TypeKind::Product)
    }

    fn new(name: impl Into<Name>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            supertype: None,
            counterpart: None,
            attributes: Vec::new(),
            associations: Vec::new(),
        }
    }

    pub fn with_supertype(mut self, supertype: impl Into<Name>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    /// Link a policy type to its product type or the other way round.
    pub fn with_counterpart(mut self, counterpart: impl Into<Name>) -> Self {
        self.counterpart = Some(counterpart.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes
            .push(attribute.with_owner(self.name.clone()));
        self
    }

    pub fn with_association(mut self, association: Association) -> Self {
        self.associations
            .push(association.with_owner(self.name.clone()));
        self
    }
}

/// Model snapshot held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryModel {
    value_types: IndexSet<Name>,
    types: IndexMap<Name, ModelType>,
    enums: IndexMap<Name, EnumType>,
    product_components: Vec<ProductComponent>,
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value_type(mut self, name: impl Into<Name>) -> Self {
        self.value_types.insert(name.into());
        self
    }

    pub fn with_value_types<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        self.value_types.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_type(mut self, model_type: ModelType) -> Self {
        self.types.insert(model_type.name.clone(), model_type);
        self
    }

    pub fn with_enum(mut self, enum_type: EnumType) -> Self {
        self.enums.insert(enum_type.name.clone(), enum_type);
        self
    }

    pub fn with_product_component(mut self, component: ProductComponent) -> Self {
        self.product_components.push(component);
        self
    }

    pub fn model_type(&self, name: &str) -> Option<&ModelType> {
        self.types.get(name)
    }

    /// Walk a type and its supertypes, stopping on cycles.
    fn hierarchy(&self, type_name: &str) -> Vec<&ModelType> {
        let mut result = Vec::new();
        let mut visited = FxHashSet::default();
        let mut current = self.types.get(type_name);
        while let Some(model_type) = current {
            if !visited.insert(model_type.name.clone()) {
                break;
            }
            result.push(model_type);
            current = model_type
                .supertype
                .as_deref()
                .and_then(|name| self.types.get(name));
        }
        result
    }

    /// Members from the whole hierarchy; a subtype member hides a supertype
    /// member of the same name.
    fn collect_members<'a, T, F, N>(&'a self, type_name: &str, members: F, name: N) -> Vec<&'a T>
    where
        F: Fn(&'a ModelType) -> &'a [T],
        N: Fn(&T) -> &str,
    {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        for model_type in self.hierarchy(type_name) {
            for member in members(model_type) {
                if seen.insert(name(member).to_string()) {
                    result.push(member);
                }
            }
        }
        result
    }
}

impl ModelRepository for InMemoryModel {
    fn find_datatype(&self, qualified_name: &str) -> Option<Datatype> {
        if self.value_types.contains(qualified_name) {
            return Some(Datatype::Value(qualified_name.into()));
        }
        if self.enums.contains_key(qualified_name) {
            return Some(Datatype::Enum(qualified_name.into()));
        }
        self.types.get(qualified_name).map(|t| match t.kind {
            TypeKind::Policy => Datatype::Policy(t.name.clone()),
            TypeKind::Product => Datatype::Product(t.name.clone()),
        })
    }

    fn attributes(&self, type_name: &str) -> Vec<&Attribute> {
        self.collect_members(type_name, |t| t.attributes.as_slice(), |a| a.name.as_str())
    }

    fn associations(&self, type_name: &str) -> Vec<&Association> {
        self.collect_members(
            type_name,
            |t| t.associations.as_slice(),
            |a| a.name.as_str(),
        )
    }

    fn product_type_of(&self, policy_type: &str) -> Option<Name> {
        self.hierarchy(policy_type)
            .into_iter()
            .filter(|t| t.kind == TypeKind::Policy)
            .find_map(|t| t.counterpart.clone())
    }

    fn policy_type_of(&self, product_type: &str) -> Option<Name> {
        self.hierarchy(product_type)
            .into_iter()
            .filter(|t| t.kind == TypeKind::Product)
            .find_map(|t| t.counterpart.clone())
    }

    fn product_components(&self) -> Vec<&ProductComponent> {
        self.product_components.iter().collect()
    }

    fn is_same_or_subtype(&self, sub_type: &str, super_type: &str) -> bool {
        self.hierarchy(sub_type)
            .iter()
            .any(|t| t.name == super_type)
    }

    fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enums.get(name)
    }
}
