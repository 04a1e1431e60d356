//! Hover tests for identifiers in formula lines.

use formula_ident::TextRegion;
use formula_ident::ide::hover;
use formula_ident::identifier::codes;
use formula_ident::model::Datatype;
use rstest::rstest;

use crate::helpers::model_fixtures::*;

#[rstest]
#[case::parameter("contract.premium * 2", 3, "parameter **contract**: `Contract`", 0, 8)]
#[case::attribute(
    "contract.premium * 2",
    10,
    "attribute **Contract.premium**: `Money`",
    9,
    16
)]
#[case::end_of_part(
    "contract.premium * 2",
    16,
    "attribute **Contract.premium**: `Money`",
    9,
    16
)]
#[case::association(
    "x + contract.coverages.sumInsured",
    15,
    "association **Contract.coverages**: `List<Coverage>`",
    13,
    22
)]
#[case::list_attribute(
    "x + contract.coverages.sumInsured",
    25,
    "attribute **Coverage.sumInsured**: `List<Money>`",
    23,
    33
)]
#[case::qualifier(
    r#"contract.coverage["Basic"].sumInsured"#,
    20,
    "qualifier **Basic** (`basic-2024`): `Coverage`",
    17,
    26
)]
#[case::qualifier_opening_quote(
    r#"contract.coverage["Basic"].sumInsured"#,
    18,
    "qualifier **Basic** (`basic-2024`): `Coverage`",
    17,
    26
)]
#[case::qualifier_closing_bracket(
    r#"contract.coverage["Basic"].sumInsured"#,
    25,
    "qualifier **Basic** (`basic-2024`): `Coverage`",
    17,
    26
)]
#[case::enum_value("Gender.m", 7, "value **Gender.m** (male): `Gender`", 7, 8)]
fn test_hover(
    #[case] line: &str,
    #[case] offset: usize,
    #[case] contents: &str,
    #[case] start: usize,
    #[case] end: usize,
) {
    let result = with_parser(|parser| hover(parser, line, offset)).unwrap();
    assert_eq!(result.contents, contents);
    assert_eq!(result.region, TextRegion::new(start, end));
    assert!(result.message.is_none());
}

#[test]
fn test_hover_default_value_access() {
    let line = "contract.premium@default";
    let result = with_parser(|parser| hover(parser, line, 12)).unwrap();
    let expected = "default value of attribute **Contract.premium**: `Money`";
    assert_eq!(result.contents, expected);
    assert_eq!(result.datatype, Some(Datatype::value("Money")));
}

#[test]
fn test_hover_on_invalid_part() {
    let line = "1 + contract.unknown.premium";
    let result = with_parser(|parser| hover(parser, line, 15)).unwrap();
    let message = result.message.unwrap();
    assert_eq!(message.code.as_ref(), codes::UNDEFINED_IDENTIFIER);
    assert_eq!(result.contents, "[F0001] Undefined identifier: unknown");
    assert_eq!(result.region, TextRegion::new(13, 20));

    // parts after the failure report the failure
    let after = with_parser(|parser| hover(parser, line, 24)).unwrap();
    assert_eq!(after.region, TextRegion::new(13, 20));
}

#[test]
fn test_no_hover_outside_identifier() {
    assert!(with_parser(|parser| hover(parser, "1 + 2", 2)).is_none());
}
