//! Code completion tests for the IDE layer.
//!
//! These tests verify that completions are suggested while typing inside a
//! whole formula line, not just a bare identifier.

use formula_ident::TextRegion;
use formula_ident::ide::completions;
use formula_ident::identifier::IdentifierNodeType;

use crate::helpers::model_fixtures::*;

// =============================================================================
// COMPLETION - TYPING INSIDE A FORMULA
// =============================================================================

#[test]
fn test_completion_after_operator() {
    let line = "round(2 * contract.pre";
    let items = with_parser(|parser| completions(parser, line, line.len()));
    let texts: Vec<_> = items.iter().map(|c| c.insert_text.as_ref()).collect();
    assert_eq!(texts, vec!["premium", "premium@default"]);

    // the typed "pre" is replaced
    assert_eq!(items[0].replace, TextRegion::new(19, 22));
    assert_eq!(items[0].kind, IdentifierNodeType::Attribute);
    assert_eq!(items[0].lsp_kind(), 10);
    assert_eq!(items[0].sort_priority, 0);
    assert_eq!(items[1].sort_priority, 1);
}

#[test]
fn test_completion_with_caret_inside_line() {
    let line = "contract.cov + factor";
    let caret = "contract.cov".len();
    let items = with_parser(|parser| completions(parser, line, caret));
    let texts: Vec<_> = items.iter().map(|c| c.insert_text.as_ref()).collect();
    assert_eq!(
        texts,
        vec![r#"coverage[""]"#, "coverage[0]", "coverages[0]"]
    );
    let typed = TextRegion::new(9, 12);
    assert!(items.iter().all(|item| item.replace == typed));
}

#[test]
fn test_completion_of_qualifier() {
    let line = r#"sum(contract.coverage["Th"#;
    let items = with_parser(|parser| completions(parser, line, line.len()));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].insert_text.as_ref(), r#"["Theft"]"#);
    assert_eq!(items[0].replace, TextRegion::new(21, 25));
    assert_eq!(items[0].kind, IdentifierNodeType::Qualifier);
}

#[test]
fn test_completion_at_start_of_identifier() {
    let line = "1 + ";
    let items = with_parser(|parser| completions(parser, line, line.len()));
    assert!(!items.is_empty());
    assert_eq!(items[0].kind, IdentifierNodeType::Parameter);
    let caret = TextRegion::new(4, 4);
    assert!(items.iter().all(|item| item.replace == caret));
}

#[test]
fn test_no_completion_inside_string_literal() {
    let line = r#"if(x = "contract."#;
    let items = with_parser(|parser| completions(parser, line, line.len()));
    assert!(items.is_empty());
}

#[test]
fn test_no_completion_after_unresolved_part() {
    let line = "contract.unknown.";
    let items = with_parser(|parser| completions(parser, line, line.len()));
    assert!(items.is_empty());
}

#[test]
fn test_documentation_only_when_described() {
    let line = "contract.prem";
    let items = with_parser(|parser| completions(parser, line, line.len()));
    let documentation = items[0].documentation.as_deref();
    assert_eq!(documentation, Some("premium - Yearly premium"));
}
