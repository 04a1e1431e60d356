//! Enumeration types and their values.

use super::{IdentifierNodeParser, name_and_description};
use crate::identifier::context::ParsingContext;
use crate::identifier::factory::IdentifierNodeFactory;
use crate::identifier::matcher::IdentifierPart;
use crate::identifier::messages::IdentifierError;
use crate::identifier::node::{IdentifierNode, NodeKind};
use crate::identifier::proposal::{IdentifierNodeType, IdentifierProposalCollector};
use crate::model::{EnumType, ModelElement};

/// Resolves `EnumType` at the root and `EnumType.value` after it.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumParser;

impl EnumParser {
    /// Enumeration types usable in the formula, in declaration order.
    fn usable_enums<'a>(context: &ParsingContext<'a>) -> impl Iterator<Item = &'a EnumType> {
        let model = context.model();
        context
            .signature()
            .enum_types
            .iter()
            .filter_map(move |name| model.enum_type(name))
    }
}

impl IdentifierNodeParser for EnumParser {
    fn parse(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode> {
        if part.is_bracket() {
            return None;
        }
        let factory = IdentifierNodeFactory::new(part.region);
        match context.current_node() {
            None => Self::usable_enums(context)
                .find(|enum_type| enum_type.name == part.text)
                .map(|enum_type| factory.enum_class(enum_type)),
            Some(IdentifierNode {
                kind: NodeKind::EnumClass(enum_type),
                ..
            }) => Some(match enum_type.value(part.text) {
                Some(value) => factory.enum_value(enum_type, value),
                None => factory.invalid(IdentifierError::undefined(part.text)),
            }),
            Some(_) => None,
        }
    }

    fn proposals(&self, context: &ParsingContext<'_>, collector: &mut IdentifierProposalCollector) {
        let localizer = context.env().localizer;
        match context.current_node() {
            None => {
                for enum_type in Self::usable_enums(context) {
                    collector.add_matching(
                        enum_type.name.as_str(),
                        enum_type.name.as_str(),
                        name_and_description(ModelElement::EnumType(enum_type), localizer),
                        IdentifierNodeType::EnumClass,
                    );
                }
            }
            Some(IdentifierNode {
                kind: NodeKind::EnumClass(enum_type),
                ..
            }) => {
                for value in &enum_type.values {
                    let element = ModelElement::EnumValue(enum_type.as_ref(), value);
                    let display = localizer
                        .label(element)
                        .unwrap_or_else(|| value.name.to_string());
                    collector.add_matching(
                        value.id.as_str(),
                        format!("{}({})", value.id, display),
                        name_and_description(element, localizer),
                        IdentifierNodeType::EnumValue,
                    );
                }
            }
            Some(_) => {}
        }
    }
}
