//! Completion suggestions for identifiers in a formula line.

use std::sync::Arc;

use super::text_utils::identifier_before_caret;
use crate::base::TextRegion;
use crate::identifier::{IdentifierNodeType, IdentifierParser, IdentifierProposal};

/// A completion suggestion ready for an editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// Display text.
    pub label: Arc<str>,
    pub kind: IdentifierNodeType,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Full text of the completed part.
    pub insert_text: Arc<str>,
    /// Region of the line replaced by `insert_text`.
    pub replace: TextRegion,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create an item replacing the typed part that starts at `part_start`.
    pub fn from_proposal(
        proposal: &IdentifierProposal,
        part_start: usize,
        sort_priority: u32,
    ) -> Self {
        let description = &proposal.description;
        Self {
            label: proposal.label.clone(),
            kind: proposal.node_type,
            documentation: (!description.is_empty()).then(|| description.clone()),
            insert_text: proposal.text.clone(),
            replace: TextRegion::new(part_start, part_start + proposal.prefix.len()),
            sort_priority,
        }
    }

    /// LSP completion item kind number.
    pub fn lsp_kind(&self) -> u32 {
        self.kind.to_lsp()
    }
}

/// Get completion suggestions for the identifier typed before `caret`.
///
/// # Arguments
/// * `parser` - The parser of the formula being edited
/// * `line` - The formula text
/// * `caret` - Byte offset of the caret in `line`
///
/// # Returns
/// Suggestions in proposal order; empty when the caret is not inside an
/// identifier or the identifier prefix does not resolve.
pub fn completions(parser: &IdentifierParser<'_>, line: &str, caret: usize) -> Vec<CompletionItem> {
    let Some((start, typed)) = identifier_before_caret(line, caret) else {
        return Vec::new();
    };
    let proposals = parser.proposals(typed);
    let Some(first) = proposals.first() else {
        return Vec::new();
    };
    let part_start = caret - first.prefix.len();
    tracing::trace!(
        "[IDENT] {} completions for '{}' at {}",
        proposals.len(),
        typed,
        start
    );
    proposals
        .iter()
        .zip(0u32..)
        .map(|(proposal, priority)| CompletionItem::from_proposal(proposal, part_start, priority))
        .collect()
}
