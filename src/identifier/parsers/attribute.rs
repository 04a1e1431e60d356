//! Attributes of the context type, including default-value access.

use super::{IdentifierNodeParser, name_and_description};
use crate::identifier::context::ParsingContext;
use crate::identifier::factory::IdentifierNodeFactory;
use crate::identifier::matcher::IdentifierPart;
use crate::identifier::messages::IdentifierError;
use crate::identifier::node::IdentifierNode;
use crate::identifier::proposal::{IdentifierNodeType, IdentifierProposalCollector};
use crate::model::{Attribute, Datatype, IdentifierKind, ModelElement};

/// Resolves attribute names, with an optional default-value suffix.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeParser;

impl AttributeParser {
    /// Attributes that may be referenced on `context_type`, after filtering.
    ///
    /// On the formula's own type this includes the formula's matching
    /// class-level attributes; on a policy type (when enabled) the attributes
    /// of its configuring product type.
    pub fn findable_attributes<'a>(
        context: &ParsingContext<'a>,
        context_type: &Datatype,
    ) -> Vec<&'a Attribute> {
        let model = context.model();
        let mut attributes = model.attributes(context_type.name());
        let policy = matches!(context_type, Datatype::Policy(_));
        let extra: Vec<&'a Attribute> = if context.is_formula_type(context_type) {
            context.signature().matching_attributes.iter().collect()
        } else if policy && context.options().product_attributes {
            model
                .product_type_of(context_type.name())
                .map(|product| model.attributes(&product))
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        for attribute in extra {
            if !attributes.iter().any(|known| known.name == attribute.name) {
                attributes.push(attribute);
            }
        }

        let filter = context.env().filter;
        attributes.retain(|attribute| {
            let element = ModelElement::Attribute(attribute);
            filter.is_identifier_allowed(element, IdentifierKind::Attribute)
        });
        attributes
    }

    fn allows_default_access(context: &ParsingContext<'_>, attribute: &Attribute) -> bool {
        if !attribute.default_value_access {
            return false;
        }
        let filter = context.env().filter;
        filter.is_identifier_allowed(
            ModelElement::Attribute(attribute),
            IdentifierKind::DefaultIdentifier,
        )
    }
}

impl IdentifierNodeParser for AttributeParser {
    fn parse(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode> {
        if part.is_bracket() {
            return None;
        }
        let context_type = context.context_type().filter(Datatype::is_structural)?;
        let (name, default_value_access) = context.options().strip_default_suffix(part.text);
        let attribute = Self::findable_attributes(context, &context_type)
            .into_iter()
            .find(|attribute| attribute.name == name)?;

        let factory = IdentifierNodeFactory::new(part.region);
        if default_value_access && !Self::allows_default_access(context, attribute) {
            return Some(factory.invalid(IdentifierError::undefined(part.text)));
        }
        let Some(datatype) = context.model().find_datatype(&attribute.datatype) else {
            tracing::debug!(
                "[IDENT] attribute '{}' has unresolvable datatype '{}'",
                attribute.name,
                attribute.datatype
            );
            return Some(factory.invalid(IdentifierError::undefined(part.text)));
        };
        Some(factory.attribute(
            attribute,
            default_value_access,
            datatype,
            context.is_list_context(),
        ))
    }

    fn proposals(&self, context: &ParsingContext<'_>, collector: &mut IdentifierProposalCollector) {
        let Some(context_type) = context.context_type().filter(Datatype::is_structural) else {
            return;
        };
        let localizer = context.env().localizer;
        let suffix = &context.options().default_value_suffix;
        for attribute in Self::findable_attributes(context, &context_type) {
            let description = name_and_description(ModelElement::Attribute(attribute), localizer);
            collector.add_matching(
                attribute.name.as_str(),
                format!("{} - {}", attribute.name, attribute.datatype),
                description.as_str(),
                IdentifierNodeType::Attribute,
            );
            if !suffix.is_empty() && Self::allows_default_access(context, attribute) {
                let text = format!("{}{}", attribute.name, suffix);
                collector.add_matching(
                    text.as_str(),
                    format!("{} - {}", text, attribute.datatype),
                    description,
                    IdentifierNodeType::Attribute,
                );
            }
        }
    }
}
