//! Associations of the context type.

use super::{IdentifierNodeParser, name_and_description};
use crate::identifier::context::ParsingContext;
use crate::identifier::factory::IdentifierNodeFactory;
use crate::identifier::matcher::IdentifierPart;
use crate::identifier::messages::IdentifierError;
use crate::identifier::node::IdentifierNode;
use crate::identifier::proposal::{IdentifierNodeType, IdentifierProposalCollector};
use crate::model::{Association, Datatype, ModelElement};

/// Explanation appended to index proposals.
pub const INDEX_DESCRIPTION: &str =
    "Selects one element of the list by its position, starting at 0.";

/// Explanation appended to qualifier proposals.
pub const QUALIFIER_DESCRIPTION: &str =
    "Selects the elements configured by the named product component.";

/// Resolves bare association names.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssociationParser;

impl AssociationParser {
    fn label(text: &str, association: &Association, list_valued: bool) -> String {
        if list_valued {
            format!("{} - list of {}", text, association.target)
        } else {
            format!("{} - {}", text, association.target)
        }
    }
}

impl IdentifierNodeParser for AssociationParser {
    fn parse(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode> {
        if part.is_bracket() {
            return None;
        }
        let context_type = context.context_type().filter(Datatype::is_structural)?;
        let model = context.model();
        let association = model
            .associations(context_type.name())
            .into_iter()
            .find(|association| association.name == part.text)?;

        let factory = IdentifierNodeFactory::new(part.region);
        Some(match model.find_datatype(&association.target) {
            Some(target) => factory.association(association, target, context.is_list_context()),
            None => factory.invalid(IdentifierError::undefined(part.text)),
        })
    }

    fn proposals(&self, context: &ParsingContext<'_>, collector: &mut IdentifierProposalCollector) {
        let Some(context_type) = context.context_type().filter(Datatype::is_structural) else {
            return;
        };
        let localizer = context.env().localizer;
        let options = context.options();
        let list_context = context.is_list_context();
        for association in context.model().associations(context_type.name()) {
            let element = ModelElement::Association(association);
            let description = name_and_description(element, localizer);

            if !association.is_one_to_many_ignoring_qualifier() {
                collector.add_matching(
                    association.name.as_str(),
                    Self::label(&association.name, association, list_context),
                    description.as_str(),
                    IdentifierNodeType::Association,
                );
            } else {
                let text = format!("{}{}", association.name, options.index_placeholder);
                collector.add_matching(
                    text.as_str(),
                    Self::label(&text, association, false),
                    format!("{INDEX_DESCRIPTION}\n{description}"),
                    IdentifierNodeType::Association,
                );
            }

            if association.is_qualified() {
                let text = format!("{}{}", association.name, options.qualifier_placeholder);
                let list_valued = association.is_one_to_many() || list_context;
                collector.add_matching(
                    text.as_str(),
                    Self::label(&text, association, list_valued),
                    format!("{QUALIFIER_DESCRIPTION}\n{description}"),
                    IdentifierNodeType::Association,
                );
            }
        }
    }
}
