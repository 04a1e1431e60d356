//! Formula parameters at the root of an identifier.

use super::{IdentifierNodeParser, name_and_description};
use crate::identifier::context::ParsingContext;
use crate::identifier::factory::IdentifierNodeFactory;
use crate::identifier::matcher::IdentifierPart;
use crate::identifier::messages::IdentifierError;
use crate::identifier::node::IdentifierNode;
use crate::identifier::proposal::{IdentifierNodeType, IdentifierProposalCollector};
use crate::model::ModelElement;

/// Resolves the first part against the formula's parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParameterParser;

impl IdentifierNodeParser for ParameterParser {
    fn parse(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode> {
        if !context.is_root() || part.is_bracket() {
            return None;
        }
        let parameter = context.signature().parameter(part.text)?;
        let factory = IdentifierNodeFactory::new(part.region);
        let datatype = parameter
            .datatype
            .as_deref()
            .and_then(|name| context.model().find_datatype(name));
        Some(match datatype {
            Some(datatype) => factory.parameter(parameter, datatype),
            None => factory.invalid(IdentifierError::undefined(part.text)),
        })
    }

    fn proposals(&self, context: &ParsingContext<'_>, collector: &mut IdentifierProposalCollector) {
        if !context.is_root() {
            return;
        }
        let localizer = context.env().localizer;
        for parameter in &context.signature().parameters {
            let label = match &parameter.datatype {
                Some(datatype) => format!("{} - {}", parameter.name, datatype),
                None => parameter.name.to_string(),
            };
            collector.add_matching(
                parameter.name.as_str(),
                label,
                name_and_description(ModelElement::Parameter(parameter), localizer),
                IdentifierNodeType::Parameter,
            );
        }
    }
}
