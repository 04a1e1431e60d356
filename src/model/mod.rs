//! Model: read-only view of the type model an identifier resolves against.
//!
//! The resolver never owns model data. It queries:
//!
//! - [`ModelRepository`] - types, attributes, associations, catalog
//!   instances and enumerations
//! - [`FormulaSignature`] - parameters and the formula's own type
//! - [`IdentifierFilter`] - allow/deny policy for attributes
//! - [`Localizer`] - labels and descriptions for proposals
//!
//! [`InMemoryModel`] is a ready-made repository for hosts and tests.

mod datatype;
mod elements;
mod memory;
mod repository;
mod signature;

pub use datatype::Datatype;
pub use elements::{
    Association, Attribute, EnumType, EnumValue, MANY, ModelElement, Parameter, ProductComponent,
};
pub use memory::{InMemoryModel, ModelType, TypeKind};
pub use repository::{
    AllowAll, DenyListFilter, ElementTexts, IdentifierFilter, IdentifierKind, Localizer,
    ModelRepository,
};
pub use signature::FormulaSignature;
