//! # formula-ident
//!
//! Resolution and completion of identifiers in product-model formulas.
//!
//! An identifier such as `policy.coverage["BASE"].sumInsured` is split into
//! parts, each part is resolved against a read-only type model, and the
//! result is a typed node chain that tracks list semantics across to-many
//! associations. The same machinery proposes ranked completions while the
//! identifier is typed.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide         → Editor features (completion, hover) over formula lines
//!   ↓
//! identifier  → Matcher, parsing context, per-kind parsers, proposals
//!   ↓
//! model       → Type model collaborators, in-memory repository
//!   ↓
//! base        → Primitives (TextRegion, Name)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → identifier → ide)
// ============================================================================

/// Foundation types: TextRegion, Name
pub mod base;

/// Type model interfaces: repository, filter, localizer, formula signature
pub mod model;

/// Identifier resolution: parsing into node chains and completion proposals
pub mod identifier;

/// IDE features: completion and hover on formula lines
pub mod ide;

// Re-export the entry points
pub use identifier::{IdentifierNode, IdentifierParser, IdentifierProposal, NodeKind, ParserOptions};

// Re-export foundation types
pub use base::{Name, TextRegion};
