//! The identifier AST: a singly linked chain of nodes.
//!
//! Each node exclusively owns its successor. Consumers only ever walk
//! forward, so there are no back references.

use std::sync::Arc;

use super::messages::Message;
use super::proposal::IdentifierNodeType;
use crate::base::{Name, TextRegion};
use crate::model::{
    Association, Attribute, Datatype, EnumType, EnumValue, Parameter, ProductComponent,
};

/// What a node refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A formula parameter (root only).
    Parameter(Arc<Parameter>),
    /// A model attribute, or its default value.
    Attribute {
        attribute: Arc<Attribute>,
        default_value_access: bool,
    },
    /// A to-one or to-many association.
    Association(Arc<Association>),
    /// `["name"]` selecting a catalog instance of a to-many association.
    Qualifier {
        qualifier: Name,
        runtime_id: Name,
        product_component: Arc<ProductComponent>,
    },
    /// `[n]` selecting one list element.
    Index(usize),
    /// An enumeration type referenced by name.
    EnumClass(Arc<EnumType>),
    /// A value of the preceding enumeration type.
    EnumValue {
        enum_type: Arc<EnumType>,
        value: EnumValue,
    },
    /// The empty identifier.
    Empty,
    /// Terminal error marker.
    Invalid(Message),
}

impl NodeKind {
    /// Proposal category of this kind, if it has one.
    pub fn node_type(&self) -> Option<IdentifierNodeType> {
        match self {
            NodeKind::Parameter(_) => Some(IdentifierNodeType::Parameter),
            NodeKind::Attribute { .. } => Some(IdentifierNodeType::Attribute),
            NodeKind::Association(_) => Some(IdentifierNodeType::Association),
            NodeKind::Qualifier { .. } => Some(IdentifierNodeType::Qualifier),
            NodeKind::Index(_) => Some(IdentifierNodeType::Index),
            NodeKind::EnumClass(_) => Some(IdentifierNodeType::EnumClass),
            NodeKind::EnumValue { .. } => Some(IdentifierNodeType::EnumValue),
            NodeKind::Empty | NodeKind::Invalid(_) => None,
        }
    }
}

/// One node of the identifier chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierNode {
    pub kind: NodeKind,
    /// Type of the identifier prefix ending here; `None` for invalid and empty nodes.
    pub datatype: Option<Datatype>,
    pub text_region: TextRegion,
    pub successor: Option<Box<IdentifierNode>>,
}

impl IdentifierNode {
    pub fn new(kind: NodeKind, datatype: Option<Datatype>, text_region: TextRegion) -> Self {
        Self {
            kind,
            datatype,
            text_region,
            successor: None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, NodeKind::Invalid(_))
    }

    pub fn is_list_of_type(&self) -> bool {
        self.datatype.as_ref().is_some_and(Datatype::is_list)
    }

    pub fn successor(&self) -> Option<&IdentifierNode> {
        self.successor.as_deref()
    }

    /// This node followed by all its successors.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { next: Some(self) }
    }

    /// The final node of the chain.
    pub fn last(&self) -> &IdentifierNode {
        let mut node = self;
        while let Some(next) = node.successor() {
            node = next;
        }
        node
    }

    /// The message of the invalid node terminating the chain, if any.
    pub fn invalid_message(&self) -> Option<&Message> {
        match &self.last().kind {
            NodeKind::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// Iterator over a node chain.
pub struct NodeIter<'a> {
    next: Option<&'a IdentifierNode>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a IdentifierNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.successor();
        Some(node)
    }
}

/// Link nodes into an owned chain, first node first.
pub(crate) fn link(nodes: Vec<IdentifierNode>) -> Option<IdentifierNode> {
    nodes.into_iter().rev().fold(None, |successor, mut node| {
        node.successor = successor.map(Box::new);
        Some(node)
    })
}
