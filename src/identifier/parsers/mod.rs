//! Per-kind identifier parsers.
//!
//! Every parser resolves one kind of identifier part and proposes
//! completions for it. For a given part a parser either:
//!
//! - declines (`None`): this kind does not apply here, try the next parser
//! - fails (`Some` invalid node): this kind applies but does not resolve
//! - succeeds (`Some` node)
//!
//! The orchestrator tries the parsers in the fixed order of [`PARSERS`].

mod association;
mod attribute;
mod enums;
mod parameter;
mod qualifier;

pub use association::AssociationParser;
pub use attribute::AttributeParser;
pub use enums::EnumParser;
pub use parameter::ParameterParser;
pub use qualifier::QualifierAndIndexParser;

use super::context::ParsingContext;
use super::matcher::IdentifierPart;
use super::node::IdentifierNode;
use super::proposal::IdentifierProposalCollector;
use crate::model::{Localizer, ModelElement};

/// Contract shared by all identifier parsers.
pub trait IdentifierNodeParser {
    /// Resolve `part` at the current position of `context`.
    fn parse(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> Option<IdentifierNode>;

    /// Add candidates for the collector's prefix at the current position.
    fn proposals(&self, context: &ParsingContext<'_>, collector: &mut IdentifierProposalCollector);
}

/// The parsers in the order they are offered each part.
pub const PARSERS: &[&dyn IdentifierNodeParser] = &[
    &ParameterParser,
    &AttributeParser,
    &AssociationParser,
    &EnumParser,
    &QualifierAndIndexParser,
];

/// Label (or name) of an element, followed by ` - <description>` when it has one.
pub fn name_and_description(element: ModelElement<'_>, localizer: &dyn Localizer) -> String {
    let mut result = localizer
        .label(element)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| element.name().to_string());
    if let Some(description) = localizer.description(element).filter(|d| !d.is_empty()) {
        result.push_str(" - ");
        result.push_str(&description);
    }
    result
}
