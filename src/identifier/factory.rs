//! Construction of identifier nodes.
//!
//! All list wrapping happens here: once a path is list valued every
//! following node stays list valued, an index unpacks the list, and a
//! qualifier is list valued only when the caller says so.

use std::sync::Arc;

use super::messages::IdentifierError;
use super::node::{IdentifierNode, NodeKind};
use crate::base::{Name, TextRegion};
use crate::model::{
    Association, Attribute, Datatype, EnumType, EnumValue, Parameter, ProductComponent,
};

/// Creates nodes for one identifier part.
#[derive(Clone, Copy, Debug)]
pub struct IdentifierNodeFactory {
    region: TextRegion,
}

impl IdentifierNodeFactory {
    pub fn new(region: TextRegion) -> Self {
        Self { region }
    }

    pub fn region(&self) -> TextRegion {
        self.region
    }

    fn node(&self, kind: NodeKind, datatype: Datatype) -> IdentifierNode {
        IdentifierNode::new(kind, Some(datatype), self.region)
    }

    pub fn parameter(&self, parameter: &Parameter, datatype: Datatype) -> IdentifierNode {
        self.node(NodeKind::Parameter(Arc::new(parameter.clone())), datatype)
    }

    pub fn attribute(
        &self,
        attribute: &Attribute,
        default_value_access: bool,
        datatype: Datatype,
        list_context: bool,
    ) -> IdentifierNode {
        self.node(
            NodeKind::Attribute {
                attribute: Arc::new(attribute.clone()),
                default_value_access,
            },
            datatype.list_if(list_context),
        )
    }

    pub fn association(
        &self,
        association: &Association,
        target: Datatype,
        list_context: bool,
    ) -> IdentifierNode {
        let many = association.is_one_to_many_ignoring_qualifier() || list_context;
        self.node(
            NodeKind::Association(Arc::new(association.clone())),
            target.list_if(many),
        )
    }

    pub fn qualifier(
        &self,
        qualifier: impl Into<Name>,
        runtime_id: Name,
        product_component: &ProductComponent,
        subject: Datatype,
        many: bool,
    ) -> IdentifierNode {
        self.node(
            NodeKind::Qualifier {
                qualifier: qualifier.into(),
                runtime_id,
                product_component: Arc::new(product_component.clone()),
            },
            subject.into_element().list_if(many),
        )
    }

    pub fn index(&self, index: usize, list: Datatype) -> IdentifierNode {
        self.node(NodeKind::Index(index), list.into_element())
    }

    pub fn enum_class(&self, enum_type: &EnumType) -> IdentifierNode {
        self.node(
            NodeKind::EnumClass(Arc::new(enum_type.clone())),
            Datatype::EnumClass(enum_type.name.clone()),
        )
    }

    pub fn enum_value(&self, enum_type: &Arc<EnumType>, value: &EnumValue) -> IdentifierNode {
        self.node(
            NodeKind::EnumValue {
                enum_type: enum_type.clone(),
                value: value.clone(),
            },
            Datatype::Enum(enum_type.name.clone()),
        )
    }

    pub fn empty(&self) -> IdentifierNode {
        IdentifierNode::new(NodeKind::Empty, None, self.region)
    }

    pub fn invalid(&self, error: IdentifierError) -> IdentifierNode {
        IdentifierNode::new(NodeKind::Invalid(error.to_message()), None, self.region)
    }
}
