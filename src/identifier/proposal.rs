//! Completion proposals for partially typed identifiers.

use std::cmp::Ordering;
use std::sync::Arc;

/// Kind of a proposal; the declaration order is the sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdentifierNodeType {
    Parameter,
    Attribute,
    Association,
    Qualifier,
    Index,
    EnumValue,
    EnumClass,
}

impl IdentifierNodeType {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            IdentifierNodeType::Parameter => 6,   // Variable
            IdentifierNodeType::Attribute => 10,  // Property
            IdentifierNodeType::Association => 5, // Field
            IdentifierNodeType::Qualifier => 12,  // Value
            IdentifierNodeType::Index => 12,      // Value
            IdentifierNodeType::EnumValue => 20,  // EnumMember
            IdentifierNodeType::EnumClass => 13,  // Enum
        }
    }
}

/// A completion candidate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierProposal {
    /// The text to insert, replacing `prefix`.
    pub text: Arc<str>,
    /// Display text.
    pub label: Arc<str>,
    /// Documentation (shown in popup).
    pub description: Arc<str>,
    pub node_type: IdentifierNodeType,
    /// What the user typed of the last part when the proposal was made.
    pub prefix: Arc<str>,
}

impl IdentifierProposal {
    pub fn new(text: impl Into<Arc<str>>, node_type: IdentifierNodeType) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            text,
            description: Arc::from(""),
            node_type,
            prefix: Arc::from(""),
        }
    }

    pub fn with_label(mut self, label: impl Into<Arc<str>>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<Arc<str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The text that still has to be inserted after the typed prefix.
    ///
    /// The prefix matched case-insensitively, so the split point is found by
    /// walking the lowercase forms of both; an empty string when the prefix
    /// does not end on a character of `text`.
    pub fn completion(&self) -> &str {
        let mut typed = self.prefix.chars().flat_map(char::to_lowercase).peekable();
        for (offset, c) in self.text.char_indices() {
            if typed.peek().is_none() {
                return &self.text[offset..];
            }
            if !c.to_lowercase().all(|lower| typed.next() == Some(lower)) {
                return "";
            }
        }
        ""
    }
}

impl Ord for IdentifierProposal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node_type
            .cmp(&other.node_type)
            .then_with(|| compare_ignore_case(&self.text, &other.text))
            .then_with(|| self.text.cmp(&other.text))
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.description.cmp(&other.description))
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for IdentifierProposal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive `starts_with`.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text.next() == Some(expected))
}

/// Accumulates proposals matching one prefix.
#[derive(Clone, Debug)]
pub struct IdentifierProposalCollector {
    prefix: Arc<str>,
    proposals: Vec<IdentifierProposal>,
}

impl IdentifierProposalCollector {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Arc::from(prefix),
            proposals: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True if `text` would be accepted by this collector.
    pub fn matches(&self, text: &str) -> bool {
        starts_with_ignore_case(text, &self.prefix)
    }

    /// Add a proposal when its text starts with the prefix. Returns whether it was added.
    pub fn add_matching(
        &mut self,
        text: impl Into<Arc<str>>,
        label: impl Into<Arc<str>>,
        description: impl Into<Arc<str>>,
        node_type: IdentifierNodeType,
    ) -> bool {
        let text = text.into();
        if !self.matches(&text) {
            return false;
        }
        self.proposals.push(
            IdentifierProposal::new(text, node_type)
                .with_label(label)
                .with_description(description)
                .with_prefix(self.prefix.clone()),
        );
        true
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Proposals in insertion order.
    pub fn proposals(&self) -> &[IdentifierProposal] {
        &self.proposals
    }

    /// Proposals in their natural order.
    pub fn into_sorted(mut self) -> Vec<IdentifierProposal> {
        self.proposals.sort();
        self.proposals
    }
}
