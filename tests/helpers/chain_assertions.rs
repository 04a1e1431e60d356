//! Assertion helpers for node chains.

use formula_ident::identifier::{IdentifierMatcher, IdentifierNode, NodeKind};

/// Kind names of every node in the chain.
pub fn kinds(chain: &IdentifierNode) -> Vec<&'static str> {
    chain
        .iter()
        .map(|node| match node.kind {
            NodeKind::Parameter(_) => "Parameter",
            NodeKind::Attribute { .. } => "Attribute",
            NodeKind::Association(_) => "Association",
            NodeKind::Qualifier { .. } => "Qualifier",
            NodeKind::Index(_) => "Index",
            NodeKind::EnumClass(_) => "EnumClass",
            NodeKind::EnumValue { .. } => "EnumValue",
            NodeKind::Empty => "Empty",
            NodeKind::Invalid(_) => "Invalid",
        })
        .collect()
}

/// Displayed datatype of every node, `-` where there is none.
pub fn datatypes(chain: &IdentifierNode) -> Vec<String> {
    chain
        .iter()
        .map(|node| {
            node.datatype
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string)
        })
        .collect()
}

/// Code of the invalid node terminating the chain.
pub fn error_code(chain: &IdentifierNode) -> Option<String> {
    chain.invalid_message().map(|m| m.code.to_string())
}

/// Assert the chain resolved every part of `identifier`.
pub fn assert_valid(identifier: &str, chain: &IdentifierNode) {
    assert!(
        chain.invalid_message().is_none(),
        "Expected '{}' to resolve, got: {:?}",
        identifier,
        chain.invalid_message()
    );
}

/// Assert node regions match the matcher parts and follow each other
/// separated only by the part separators.
pub fn assert_contiguous_regions(identifier: &str, chain: &IdentifierNode) {
    let parts = IdentifierMatcher::split(identifier);
    let nodes: Vec<_> = chain.iter().collect();
    assert!(nodes.len() <= parts.len());
    for (node, part) in nodes.iter().zip(&parts) {
        assert_eq!(node.text_region, part.region, "region of '{}'", part.text);
    }
    for (pair, part) in nodes.windows(2).zip(parts.iter().skip(1)) {
        assert!(
            pair[0]
                .text_region
                .is_adjacent_to(&pair[1].text_region, part.separator.width()),
            "{} and {} are not adjacent in '{}'",
            pair[0].text_region,
            pair[1].text_region,
            identifier
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::model_fixtures::parse;

    #[test]
    fn test_kinds_of_parameter() {
        assert_eq!(kinds(&parse("contract")), vec!["Parameter"]);
        assert_eq!(datatypes(&parse("contract")), vec!["Contract"]);
        assert_eq!(error_code(&parse("contract")), None);
    }
}
