//! Completion proposals for partially typed identifiers.

use formula_ident::identifier::{IdentifierNodeType, IdentifierProposal, ParserOptions};
use formula_ident::model::{DenyListFilter, IdentifierKind};
use rstest::rstest;

use crate::helpers::model_fixtures::*;

fn proposals(input: &str) -> Vec<IdentifierProposal> {
    with_parser(|parser| parser.proposals(input))
}

// =============================================================================
// ROOT
// =============================================================================

#[test]
fn test_parameter_prefix() {
    assert_eq!(proposal_texts("anyParam"), vec!["anyParameter"]);
    assert_eq!(proposal_texts("CONTR"), vec!["contract"]);
}

#[test]
fn test_no_proposals_after_unresolved_part() {
    assert!(proposal_texts("anyParam.").is_empty());
    assert!(proposal_texts("contract.unknown.").is_empty());
    assert!(proposal_texts("contract.unknown.pre").is_empty());
}

#[test]
fn test_root_proposals_in_kind_order() {
    let all = proposals("");
    let node_types: Vec<_> = all.iter().map(|p| p.node_type).collect();
    let mut sorted = node_types.clone();
    sorted.sort();
    assert_eq!(node_types, sorted);

    let texts: Vec<_> = all.iter().map(|p| p.text.as_ref()).collect();
    assert_eq!(
        texts,
        vec![
            "anyParameter",
            "contract",
            "factor",
            "baseRate",
            "minPremium",
            "productName",
            "Gender",
            "PaymentMode",
        ]
    );
    let last = all.last().map(|p| p.node_type);
    assert_eq!(last, Some(IdentifierNodeType::EnumClass));
}

#[test]
fn test_parameter_proposal_texts() {
    let contract = &proposals("con")[0];
    assert_eq!(contract.label.as_ref(), "contract - Contract");
    assert_eq!(contract.description.as_ref(), "contract - The contract");
    assert_eq!(contract.prefix.as_ref(), "con");
    assert_eq!(contract.completion(), "tract");
}

// =============================================================================
// MEMBERS
// =============================================================================

#[test]
fn test_members_of_policy_type() {
    assert_eq!(
        proposal_texts("contract."),
        vec![
            "effectiveFrom",
            "minPremium",
            "paymentMode",
            "premium",
            "premium@default",
            "productName",
            r#"coverage[""]"#,
            "coverage[0]",
            "coverages[0]",
            "insuredPerson",
        ]
    );
}

#[rstest]
#[case::attribute_prefix("contract.pre", &["premium", "premium@default"])]
#[case::case_insensitive("contract.PRE", &["premium", "premium@default"])]
#[case::association_prefix("contract.cov", &[r#"coverage[""]"#, "coverage[0]", "coverages[0]"])]
#[case::after_index("contract.coverages[0].sum", &["sumInsured", "sumInsured@default"])]
#[case::after_qualifier(
    r#"contract.coverage["Basic"]."#,
    &["coverageCode", "sumInsured", "sumInsured@default", "deductibles[0]", "insuredObject"]
)]
#[case::in_list_context("contract.coverages.insuredObject.ow", &["owner"])]
#[case::enum_values("Gender.", &["d", "f", "m"])]
#[case::value_type("contract.premium.", &[])]
#[case::glued_after_bracket("contract.coverages[0]sum", &[])]
fn test_member_proposals(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(proposal_texts(input), expected, "proposals for '{input}'");
}

#[test]
fn test_default_value_proposal_follows_base() {
    let all = proposals("contract.premium");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].text.as_ref(), "premium");
    assert_eq!(all[0].description.as_ref(), "premium - Yearly premium");
    assert_eq!(all[1].text.as_ref(), "premium@default");
    assert_eq!(all[1].label.as_ref(), "premium@default - Money");
}

#[test]
fn test_association_labels() {
    let all = proposals("contract.");
    let label = |text: &str| {
        all.iter()
            .find(|p| p.text.as_ref() == text)
            .map(|p| p.label.to_string())
            .unwrap()
    };
    assert_eq!(label("insuredPerson"), "insuredPerson - Person");
    assert_eq!(label("coverages[0]"), "coverages[0] - Coverage");
    assert_eq!(label(r#"coverage[""]"#), r#"coverage[""] - Coverage"#);

    let listed = proposals("contract.coverages.insuredObject.");
    let owner = listed.iter().find(|p| p.text.as_ref() == "owner").unwrap();
    assert_eq!(owner.label.as_ref(), "owner - list of Person");
}

#[test]
fn test_index_and_qualifier_descriptions() {
    let all = proposals("contract.coverage");
    let index = all
        .iter()
        .find(|p| p.text.as_ref() == "coverage[0]")
        .unwrap();
    let description = &index.description;
    assert!(description.ends_with("\ncoverage"), "{description}");
    assert!(description.len() > "\ncoverage".len());
    let association = IdentifierNodeType::Association;
    assert!(all.iter().all(|p| p.node_type == association));
}

#[test]
fn test_enum_value_labels() {
    let labels: Vec<_> = proposals("Gender.")
        .iter()
        .map(|p| p.label.to_string())
        .collect();
    assert_eq!(labels, vec!["d(diverse)", "f(female)", "m(male)"]);
}

// =============================================================================
// QUALIFIERS
// =============================================================================

#[rstest]
#[case::open_bracket("contract.coverage[", &[r#"["Basic"]"#, r#"["Theft"]"#])]
#[case::open_quote(r#"contract.coverages[""#, &[r#"["Basic"]"#, r#"["Theft"]"#])]
#[case::partial_name(r#"contract.coverage["th"#, &[r#"["Theft"]"#])]
#[case::closed_quote(r#"contract.coverage["Basic""#, &[])]
#[case::closed_bracket(r#"contract.coverage["Basic"]"#, &[])]
#[case::to_one_target("contract.insuredPerson[", &[])]
#[case::no_association("contract[", &[])]
fn test_qualifier_proposals(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(proposal_texts(input), expected, "proposals for '{input}'");
}

#[test]
fn test_qualifier_proposal_kind() {
    let all = proposals("contract.coverage[");
    let qualifier = IdentifierNodeType::Qualifier;
    assert!(all.iter().all(|p| p.node_type == qualifier));
    assert_eq!(all[0].label.as_ref(), "Basic - CoverageProduct");
    assert_eq!(all[0].completion(), r#""Basic"]"#);
}

// =============================================================================
// FILTERS AND OPTIONS
// =============================================================================

#[test]
fn test_filter_hides_proposals() {
    let filter = DenyListFilter::new()
        .deny("Contract.effectiveFrom", IdentifierKind::Attribute)
        .deny("Contract.premium", IdentifierKind::DefaultIdentifier);
    with_configured_parser(&filter, ParserOptions::default(), |parser| {
        let texts: Vec<_> = parser
            .proposals("contract.")
            .iter()
            .map(|p| p.text.to_string())
            .collect();
        assert!(!texts.contains(&"effectiveFrom".to_string()));
        assert!(!texts.contains(&"premium@default".to_string()));
        assert!(texts.contains(&"premium".to_string()));
    });
}

#[test]
fn test_custom_placeholders_and_limit() {
    let options = ParserOptions::default()
        .with_index_placeholder("[i]")
        .with_qualifier_placeholder("[\"?\"]")
        .with_max_proposals(2);
    with_configured_parser(&DenyListFilter::new(), options, |parser| {
        let texts: Vec<_> = parser
            .proposals("contract.cov")
            .iter()
            .map(|p| p.text.to_string())
            .collect();
        assert_eq!(texts, vec![r#"coverage["?"]"#, "coverage[i]"]);
    });
}
