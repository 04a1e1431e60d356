//! IDE features: editor-facing APIs over the identifier resolver.
//!
//! The resolver works on a bare identifier. Editors hold a whole formula
//! line and a caret; this module finds the identifier at the caret and
//! converts results into editor-friendly values.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, with `to_lsp` numbers at the boundary
//!
//! ## Usage
//!
//! ```
//! use formula_ident::ide::completions;
//! use formula_ident::identifier::IdentifierParser;
//! use formula_ident::model::{
//!     Attribute, FormulaSignature, InMemoryModel, ModelType, Parameter,
//! };
//!
//! let model = InMemoryModel::new()
//!     .with_value_type("Money")
//!     .with_type(ModelType::policy("Policy").with_attribute(Attribute::new("premium", "Money")));
//! let signature = FormulaSignature::new("f").with_parameter(Parameter::new("policy", "Policy"));
//! let parser = IdentifierParser::new(&model, &signature);
//!
//! let line = "2 * policy.pre";
//! let items = completions(&parser, line, line.len());
//! assert_eq!(items[0].insert_text.as_ref(), "premium");
//! ```

mod completion;
mod hover;
pub mod text_utils;

pub use completion::{CompletionItem, completions};
pub use hover::{HoverResult, hover};
pub use text_utils::{identifier_at, identifier_before_caret};
