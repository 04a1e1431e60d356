//! Bracketed qualifiers (`["name"]`) and indices (`[0]`) after an association.

use super::{IdentifierNodeParser, name_and_description};
use crate::base::Name;
use crate::identifier::context::ParsingContext;
use crate::identifier::factory::IdentifierNodeFactory;
use crate::identifier::matcher::IdentifierPart;
use crate::identifier::messages::IdentifierError;
use crate::identifier::node::{IdentifierNode, NodeKind};
use crate::identifier::proposal::{IdentifierNodeType, IdentifierProposalCollector};
use crate::model::{Association, ModelElement, ProductComponent};

/// Content of a bracket part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bracket<'a> {
    Qualifier(&'a str),
    Index(usize),
    Malformed,
}

impl<'a> Bracket<'a> {
    fn classify(text: &'a str) -> Self {
        let Some(inner) = text
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        else {
            return Bracket::Malformed;
        };
        if let Some(name) = inner
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            return Bracket::Qualifier(name);
        }
        if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
            return inner.parse().map_or(Bracket::Malformed, Bracket::Index);
        }
        Bracket::Malformed
    }
}

/// Resolves bracket parts against the preceding association or qualifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct QualifierAndIndexParser;

impl QualifierAndIndexParser {
    /// Catalog instances a qualifier on `association` may name.
    fn candidates<'a>(
        context: &ParsingContext<'a>,
        association: &Association,
    ) -> Vec<&'a ProductComponent> {
        let model = context.model();
        let Some(product_type) = model.product_type_of(&association.target) else {
            return Vec::new();
        };
        model
            .product_components()
            .into_iter()
            .filter(|component| model.is_same_or_subtype(&component.product_type, &product_type))
            .collect()
    }

    fn index(
        part: &IdentifierPart<'_>,
        index: usize,
        association: &Association,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode> {
        let factory = IdentifierNodeFactory::new(part.region);
        let current = context.current_node()?;
        let allowed = match current.kind {
            NodeKind::Qualifier { .. } => current.is_list_of_type(),
            _ => association.is_one_to_many() || context.is_list_context(),
        };
        if !allowed {
            let error = IdentifierError::no_index(association.name.as_str(), part.text);
            return Some(factory.invalid(error));
        }
        let list = current.datatype.clone()?;
        Some(factory.index(index, list))
    }

    fn qualifier(
        part: &IdentifierPart<'_>,
        qualifier: &str,
        association: &Association,
        context: &ParsingContext<'_>,
    ) -> IdentifierNode {
        let factory = IdentifierNodeFactory::new(part.region);
        let model = context.model();
        let error = IdentifierError::unknown_qualifier(association.name.as_str(), part.text);
        let unknown = || factory.invalid(error.clone());

        let Some(component) = Self::candidates(context, association)
            .into_iter()
            .find(|component| component.name == qualifier)
        else {
            return unknown();
        };
        let Some(runtime_id) = component.runtime_id.clone() else {
            tracing::debug!(
                "[IDENT] product component '{}' has no runtime id",
                component.qualified_name
            );
            return unknown();
        };
        let subject = model
            .policy_type_of(&component.product_type)
            .and_then(|name| model.find_datatype(&name))
            .or_else(|| model.find_datatype(&association.target));
        let Some(subject) = subject else {
            return unknown();
        };
        let many = association.is_one_to_many() || context.is_list_context_before_association();
        factory.qualifier(Name::from(qualifier), runtime_id, component, subject, many)
    }
}

impl IdentifierNodeParser for QualifierAndIndexParser {
    fn parse(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode> {
        if !part.is_bracket() {
            return None;
        }
        let association = context.predecessor_association()?;
        match Bracket::classify(part.text) {
            Bracket::Index(index) => Self::index(part, index, association, context),
            Bracket::Qualifier(qualifier) => {
                Some(Self::qualifier(part, qualifier, association, context))
            }
            Bracket::Malformed => {
                let factory = IdentifierNodeFactory::new(part.region);
                let name = association.name.as_str();
                Some(factory.invalid(IdentifierError::unknown_qualifier(name, part.text)))
            }
        }
    }

    fn proposals(&self, context: &ParsingContext<'_>, collector: &mut IdentifierProposalCollector) {
        let prefix = collector.prefix();
        if !prefix.starts_with('[') {
            return;
        }
        // Nothing sensible to add once the literal or the bracket is closed.
        if prefix.matches('"').count() >= 2 || prefix.ends_with(']') {
            return;
        }
        let Some(association) = context.predecessor_association() else {
            return;
        };
        let localizer = context.env().localizer;
        for component in Self::candidates(context, association) {
            if component.runtime_id.is_none() {
                continue;
            }
            collector.add_matching(
                format!("[\"{}\"]", component.name),
                format!("{} - {}", component.name, component.product_type),
                name_and_description(ModelElement::ProductComponent(component), localizer),
                IdentifierNodeType::Qualifier,
            );
        }
    }
}
