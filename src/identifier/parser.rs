//! The identifier parser: drives the parser chain over a whole identifier.
//!
//! ```text
//! "policy.coverage[\"BASE\"].sumInsured"
//!     │  IdentifierMatcher
//!     ▼
//! policy │ coverage │ ["BASE"] │ sumInsured
//!     │  PARSERS, first non-None result per part
//!     ▼
//! Parameter → Association → Qualifier → Attribute
//! ```
//!
//! Parsing stops at the first invalid node. Proposals resolve every complete
//! part the same way and then ask all parsers for candidates for the last,
//! partially typed part.

use super::context::{Environment, ParsingContext};
use super::factory::IdentifierNodeFactory;
use super::matcher::{IdentifierMatcher, IdentifierPart, Separator};
use super::messages::IdentifierError;
use super::node::IdentifierNode;
use super::options::ParserOptions;
use super::parsers::PARSERS;
use super::proposal::{IdentifierProposal, IdentifierProposalCollector};
use crate::model::{
    AllowAll, ElementTexts, FormulaSignature, IdentifierFilter, Localizer, ModelRepository,
};

/// Parses identifiers typed into one formula.
pub struct IdentifierParser<'a> {
    model: &'a dyn ModelRepository,
    signature: &'a FormulaSignature,
    filter: &'a dyn IdentifierFilter,
    localizer: &'a dyn Localizer,
    options: ParserOptions,
}

impl<'a> IdentifierParser<'a> {
    /// Create a parser that allows every attribute and uses the texts stored on the elements.
    pub fn new(model: &'a dyn ModelRepository, signature: &'a FormulaSignature) -> Self {
        Self {
            model,
            signature,
            filter: &AllowAll,
            localizer: &ElementTexts,
            options: ParserOptions::default(),
        }
    }

    pub fn with_filter(mut self, filter: &'a dyn IdentifierFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_localizer(mut self, localizer: &'a dyn Localizer) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    fn env(&self) -> Environment<'_> {
        Environment {
            model: self.model,
            signature: self.signature,
            filter: self.filter,
            localizer: self.localizer,
            options: &self.options,
        }
    }

    /// Parse `identifier` into a node chain.
    ///
    /// The chain ends at the last part or at the first invalid node. The
    /// empty identifier yields a single empty node at `0..0`.
    pub fn parse(&self, identifier: &str) -> IdentifierNode {
        let mut matcher = IdentifierMatcher::new(identifier);
        let empty = IdentifierNodeFactory::new(matcher.text_region()).empty();
        if identifier.is_empty() {
            return empty;
        }

        let mut context = ParsingContext::new(self.env());
        loop {
            let node = self.parse_part(&matcher.current(), &context);
            let invalid = node.is_invalid();
            context.push_node(node);
            if invalid || !matcher.has_next_identifier_part() {
                break;
            }
            matcher.next_identifier_part();
        }
        context.into_chain().unwrap_or(empty)
    }

    /// Offer one part to the parser chain.
    fn parse_part(
        &self,
        part: &IdentifierPart<'_>,
        context: &ParsingContext<'_>,
    ) -> IdentifierNode {
        tracing::trace!("[IDENT] parsing part '{}' at {}", part.text, part.region);
        if part.separator != Separator::Missing {
            for parser in PARSERS {
                if let Some(node) = parser.parse(part, context) {
                    if node.is_invalid() {
                        tracing::debug!(
                            "[IDENT] part '{}' at {} is invalid: {:?}",
                            part.text,
                            part.region,
                            node.invalid_message()
                        );
                    }
                    return node;
                }
            }
        }
        tracing::debug!(
            "[IDENT] no parser accepts part '{}' at {}",
            part.text,
            part.region
        );
        IdentifierNodeFactory::new(part.region).invalid(IdentifierError::undefined(part.text))
    }

    /// Completion proposals for `existing_content`, the identifier up to the caret.
    pub fn proposals(&self, existing_content: &str) -> Vec<IdentifierProposal> {
        let mut matcher = IdentifierMatcher::new(existing_content);
        let mut context = ParsingContext::new(self.env());
        while matcher.has_next_identifier_part() {
            let node = self.parse_part(&matcher.current(), &context);
            if node.is_invalid() {
                tracing::debug!(
                    "[IDENT] no proposals for '{}': prefix does not resolve",
                    existing_content
                );
                return Vec::new();
            }
            context.push_node(node);
            matcher.next_identifier_part();
        }
        if matcher.separator() == Separator::Missing {
            return Vec::new();
        }

        let mut collector = IdentifierProposalCollector::new(matcher.identifier_part());
        for parser in PARSERS {
            parser.proposals(&context, &mut collector);
        }
        let mut proposals = collector.into_sorted();
        if let Some(max) = self.options.max_proposals {
            proposals.truncate(max);
        }
        tracing::trace!(
            "[IDENT] {} proposals for '{}'",
            proposals.len(),
            existing_content
        );
        proposals
    }
}
