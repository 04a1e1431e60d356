//! Identifier resolution for formulas.
//!
//! Turns a dotted identifier such as `policy.coverage["BASE"].sumInsured`
//! into a typed node chain, and proposes completions for a partially typed
//! one.
//!
//! ## Key Types
//!
//! - [`IdentifierParser`]: entry point for parsing and proposals
//! - [`IdentifierNode`] / [`NodeKind`]: the resulting chain
//! - [`IdentifierMatcher`]: splits an identifier into parts
//! - [`IdentifierNodeParser`]: contract of the per-kind parsers in [`PARSERS`]
//! - [`IdentifierProposal`]: a ranked completion candidate
//!
//! ## Flow
//!
//! ```text
//! identifier text
//!     │
//!     ▼
//! IdentifierMatcher        ← parts with regions
//!     │
//!     ▼
//! ParsingContext           ← current type, list context
//!     │
//!     ▼
//! PARSERS                  ← decline / fail / succeed per part
//!     │
//!     ▼
//! IdentifierNode chain     ← or proposals for the last part
//! ```

mod context;
mod factory;
mod matcher;
mod messages;
mod node;
mod options;
mod parser;
mod parsers;
mod proposal;


pub use context::{Environment, ParsingContext};
pub use factory::IdentifierNodeFactory;
pub use matcher::{IdentifierMatcher, IdentifierPart, Separator};
pub use messages::{IdentifierError, Message, Severity, codes};
pub use node::{IdentifierNode, NodeIter, NodeKind};
#[cfg(feature = "serde")]
pub use options::OptionsError;
pub use options::ParserOptions;
pub use parser::IdentifierParser;
pub use parsers::{
    AssociationParser, AttributeParser, EnumParser, IdentifierNodeParser, PARSERS, ParameterParser,
    QualifierAndIndexParser, name_and_description,
};
pub use proposal::{
    IdentifierNodeType, IdentifierProposal, IdentifierProposalCollector, starts_with_ignore_case,
};
