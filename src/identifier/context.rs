//! Per-request parsing state.
//!
//! A `ParsingContext` is created for one parse or proposal request and
//! dropped afterwards. It collects the nodes parsed so far and answers the
//! questions parsers ask about the current position: which type the next
//! part resolves against, and whether the path is list valued.

use super::node::{IdentifierNode, NodeKind, link};
use super::options::ParserOptions;
use crate::model::{
    Association, Datatype, FormulaSignature, IdentifierFilter, Localizer, ModelRepository,
};

/// The read-only collaborators of one request.
#[derive(Clone, Copy)]
pub struct Environment<'a> {
    pub model: &'a dyn ModelRepository,
    pub signature: &'a FormulaSignature,
    pub filter: &'a dyn IdentifierFilter,
    pub localizer: &'a dyn Localizer,
    pub options: &'a ParserOptions,
}

/// Mutable cursor over one parse.
pub struct ParsingContext<'a> {
    env: Environment<'a>,
    nodes: Vec<IdentifierNode>,
    list_context: bool,
}

impl<'a> ParsingContext<'a> {
    pub fn new(env: Environment<'a>) -> Self {
        Self {
            env,
            nodes: Vec::new(),
            list_context: false,
        }
    }

    pub fn env(&self) -> &Environment<'a> {
        &self.env
    }

    pub fn model(&self) -> &'a dyn ModelRepository {
        self.env.model
    }

    pub fn signature(&self) -> &'a FormulaSignature {
        self.env.signature
    }

    pub fn options(&self) -> &'a ParserOptions {
        self.env.options
    }

    /// Append a node; list context follows the node's datatype.
    pub fn push_node(&mut self, node: IdentifierNode) {
        self.list_context = node.is_list_of_type();
        self.nodes.push(node);
    }

    pub fn current_node(&self) -> Option<&IdentifierNode> {
        self.nodes.last()
    }

    pub fn is_root(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The path so far crossed an unconsumed to-many relationship.
    pub fn is_list_context(&self) -> bool {
        self.list_context
    }

    /// The type the next part resolves against: the element type of the
    /// current node, or the formula's own type at the root.
    pub fn context_type(&self) -> Option<Datatype> {
        match self.current_node() {
            Some(node) => node.datatype.as_ref().map(|t| t.element().clone()),
            None => self.formula_type(),
        }
    }

    /// The formula's own type, if it resolves.
    pub fn formula_type(&self) -> Option<Datatype> {
        let name = self.env.signature.formula_type.as_deref()?;
        self.env.model.find_datatype(name)
    }

    pub fn is_formula_type(&self, datatype: &Datatype) -> bool {
        self.env
            .signature
            .formula_type
            .as_deref()
            .is_some_and(|name| !datatype.is_list() && datatype.name() == name)
    }

    /// Position of the association the current bracket suffix applies to:
    /// the current node, or the association before a run of qualifiers.
    fn association_position(&self) -> Option<usize> {
        let mut position = self.nodes.len().checked_sub(1)?;
        loop {
            match &self.nodes[position].kind {
                NodeKind::Association(_) => return Some(position),
                NodeKind::Qualifier { .. } => position = position.checked_sub(1)?,
                _ => return None,
            }
        }
    }

    /// The association a bracket suffix at the current position applies to.
    pub fn predecessor_association(&self) -> Option<&Association> {
        match &self.nodes[self.association_position()?].kind {
            NodeKind::Association(association) => Some(association.as_ref()),
            _ => None,
        }
    }

    /// Whether the path was already list valued before that association.
    pub fn is_list_context_before_association(&self) -> bool {
        self.association_position()
            .and_then(|position| position.checked_sub(1))
            .is_some_and(|position| self.nodes[position].is_list_of_type())
    }

    /// Link the collected nodes into the owned chain.
    pub fn into_chain(self) -> Option<IdentifierNode> {
        link(self.nodes)
    }
}
