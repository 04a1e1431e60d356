//! Structural properties that hold for every identifier.

use formula_ident::identifier::{
    IdentifierMatcher, IdentifierNodeType, IdentifierProposal, NodeKind,
};
use rstest::rstest;

use crate::helpers::chain_assertions::*;
use crate::helpers::model_fixtures::*;

const IDENTIFIERS: &[&str] = &[
    "",
    "contract",
    "contract.",
    "contract.premium",
    "contract.coverages.sumInsured",
    r#"contract.coverage["Basic"].sumInsured"#,
    r#"contract.coverage["a.b"].x"#,
    r#"contract.coverage["a]b"].x"#,
    "contract.coverages[0][1]",
    "contract.coverages[0]sumInsured",
    r#"contract.coverages["Bas"#,
    "a..b",
    "[0]",
    "é.ü[\"ß\"]",
];

// =============================================================================
// MATCHER
// =============================================================================

#[test]
fn test_parts_reconstruct_input() {
    for identifier in IDENTIFIERS {
        let rebuilt: String = IdentifierMatcher::split(identifier)
            .iter()
            .map(|part| format!("{}{}", part.separator.as_str(), part.text))
            .collect();
        assert_eq!(&rebuilt, identifier);
    }
}

#[test]
fn test_part_regions_cover_their_text() {
    for identifier in IDENTIFIERS {
        for part in IdentifierMatcher::split(identifier) {
            let text = part.region.substring(identifier);
            assert_eq!(text, Some(part.text), "in '{identifier}'");
        }
    }
}

// =============================================================================
// NODE REGIONS
// =============================================================================

#[test]
fn test_node_regions_are_contiguous() {
    for identifier in IDENTIFIERS {
        let chain = parse(identifier);
        assert_contiguous_regions(identifier, &chain);
    }
}

#[test]
fn test_valid_chain_spans_whole_input() {
    for identifier in IDENTIFIERS {
        let chain = parse(identifier);
        if chain.invalid_message().is_none() {
            assert_eq!(chain.text_region.start(), 0, "start of '{identifier}'");
            let end = chain.last().text_region.end();
            assert_eq!(end, identifier.len(), "end of '{identifier}'");
        }
    }
}

// =============================================================================
// LIST SEMANTICS
// =============================================================================

#[test]
fn test_to_many_association_example() {
    let chain = parse("contract.coverages.sumInsured");
    assert_eq!(kinds(&chain), vec!["Parameter", "Association", "Attribute"]);
    let types = datatypes(&chain);
    assert_eq!(types, vec!["Contract", "List<Coverage>", "List<Money>"]);
}

#[test]
fn test_list_persists_until_consumed() {
    let chain = parse("contract.coverages.insuredObject.owner.name");
    assert_valid("contract.coverages.insuredObject.owner.name", &chain);
    let lists: Vec<_> = chain.iter().map(|node| node.is_list_of_type()).collect();
    assert_eq!(lists, vec![false, true, true, true, true]);
}

#[rstest]
#[case::index(
    "contract.coverages[0].insuredObject.power",
    &["Contract", "List<Coverage>", "Coverage", "Vehicle", "Integer"]
)]
#[case::qualifier_then_index(
    r#"contract.coverages["Basic"][0].sumInsured"#,
    &["Contract", "List<Coverage>", "List<Coverage>", "Coverage", "Money"]
)]
#[case::index_after_earlier_hop(
    "contract.coverages.insuredObject[0].power",
    &["Contract", "List<Coverage>", "List<Vehicle>", "Vehicle", "Integer"]
)]
#[case::second_hop_after_index(
    "contract.coverages[0].deductibles.amount",
    &["Contract", "List<Coverage>", "Coverage", "List<Deductible>", "List<Money>"]
)]
fn test_brackets_consume_one_list_layer(#[case] identifier: &str, #[case] expected: &[&str]) {
    let chain = parse(identifier);
    assert_valid(identifier, &chain);
    assert_eq!(datatypes(&chain), expected, "datatypes of '{identifier}'");
}

#[test]
fn test_index_on_to_one_needs_list_context() {
    assert_eq!(
        error_code(&parse("contract.insuredPerson[0]")),
        Some("F0002".to_string())
    );
    let chain = parse("contract.coverages.insuredObject[0]");
    assert_valid("contract.coverages.insuredObject[0]", &chain);
    assert_eq!(chain.last().kind, NodeKind::Index(0));
}

// =============================================================================
// PROPOSAL ORDER
// =============================================================================

#[test]
fn test_proposal_order_is_total() {
    let mut proposals: Vec<IdentifierProposal> = with_parser(|parser| {
        ["", "contract.", "Gender.", "contract.coverage["]
            .iter()
            .flat_map(|input| parser.proposals(input))
            .collect()
    });
    let attribute = IdentifierNodeType::Attribute;
    proposals.push(IdentifierProposal::new("Premium", attribute));
    let relabeled = IdentifierProposal::new("premium", attribute).with_label("other");
    proposals.push(relabeled);

    let mut sorted = proposals.clone();
    sorted.sort();
    let mut twice = sorted.clone();
    twice.sort();
    assert_eq!(sorted, twice);

    let mut reversed = proposals.clone();
    reversed.reverse();
    reversed.sort();
    assert_eq!(sorted, reversed);

    for pair in sorted.windows(2) {
        assert!(pair[0] <= pair[1]);
        assert!(pair[0].node_type <= pair[1].node_type);
    }
}
