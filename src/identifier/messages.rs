//! Messages carried by invalid identifier nodes.

use std::sync::Arc;

use thiserror::Error;

/// Severity level of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
        }
    }
}

/// Message codes reported by the resolver.
pub mod codes {
    /// The identifier (or one of its parts) does not resolve.
    pub const UNDEFINED_IDENTIFIER: &str = "F0001";
    /// An index was applied to a path that is not list valued.
    pub const NO_INDEX_FOR_1TO1_ASSOCIATION: &str = "F0002";
    /// A qualifier names no catalog instance, or is malformed.
    pub const UNKNOWN_QUALIFIER: &str = "F0003";
}

/// A structured `(code, text, severity)` message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub code: Arc<str>,
    pub text: Arc<str>,
    pub severity: Severity,
}

impl Message {
    pub fn error(code: impl Into<Arc<str>>, text: impl Into<Arc<str>>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.text)
    }
}

/// Resolution failures, one variant per message code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Undefined identifier: {0}")]
    UndefinedIdentifier(String),

    #[error(
        "Index {index} is not allowed, association '{association}' is a 1-to-1 association"
    )]
    NoIndexFor1To1Association { association: String, index: String },

    #[error("Unknown qualifier {qualifier} for association '{association}'")]
    UnknownQualifier {
        association: String,
        qualifier: String,
    },
}

impl IdentifierError {
    pub fn undefined(identifier: impl Into<String>) -> Self {
        Self::UndefinedIdentifier(identifier.into())
    }

    pub fn no_index(association: impl Into<String>, index: impl Into<String>) -> Self {
        Self::NoIndexFor1To1Association {
            association: association.into(),
            index: index.into(),
        }
    }

    pub fn unknown_qualifier(association: impl Into<String>, qualifier: impl Into<String>) -> Self {
        Self::UnknownQualifier {
            association: association.into(),
            qualifier: qualifier.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::UndefinedIdentifier(_) => codes::UNDEFINED_IDENTIFIER,
            Self::NoIndexFor1To1Association { .. } => codes::NO_INDEX_FOR_1TO1_ASSOCIATION,
            Self::UnknownQualifier { .. } => codes::UNKNOWN_QUALIFIER,
        }
    }

    pub fn to_message(&self) -> Message {
        Message::error(self.code(), self.to_string())
    }
}

impl From<IdentifierError> for Message {
    fn from(error: IdentifierError) -> Self {
        error.to_message()
    }
}
