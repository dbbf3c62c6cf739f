//! End-to-end parsing tests for rule expressions.

use model::{ConditionType, LogicalOperator, Operand, RuleSet};
use rule_syntax::{ParseError, RuleParser, RuleRegistry};
use tracing_test::traced_test;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_or_expression() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    let rule = parser
        .parse(&mut registry, "A>10 OR B<5", &columns(&["A", "B"]), Some("test_or"))
        .unwrap();

    assert_eq!(rule.conditions.len(), 2);
    assert_eq!(rule.logical_ops, vec![LogicalOperator::Or]);
    assert_eq!(rule.conditions[0].value, Operand::Int(10));
    assert_eq!(rule.conditions[1].operator, ConditionType::LessThan);
}

#[test]
fn test_parse_mixed_case_keywords_and_spacing() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    let rule = parser
        .parse(
            &mut registry,
            "A > 1 and B = 'y' Or X contains \"cc\"",
            &columns(&["A", "B", "X"]),
            None,
        )
        .unwrap();

    assert_eq!(rule.conditions.len(), 3);
    assert_eq!(rule.conditions[1].value, Operand::Literal("y".into()));
    assert_eq!(rule.conditions[2].operator, ConditionType::Contains);
    assert_eq!(
        rule.logical_ops,
        vec![LogicalOperator::And, LogicalOperator::Or]
    );
}

#[test]
fn test_column_to_column_comparison() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    let rule = parser
        .parse(
            &mut registry,
            "Current>Threshold",
            &columns(&["Current", "Voltage", "Threshold"]),
            Some("test_col_compare"),
        )
        .unwrap();

    assert_eq!(rule.conditions[0].value, Operand::Column("Threshold".into()));
}

#[test]
fn test_unquoted_word_stays_text() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    let rule = parser
        .parse(
            &mut registry,
            "JB_Property=YES",
            &columns(&["JB_Property", "Status"]),
            Some("test_bc"),
        )
        .unwrap();

    assert_eq!(rule.conditions[0].value, Operand::Text("YES".into()));
}

#[test]
fn test_nested_parentheses_are_not_parsed() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    let err = parser
        .parse(&mut registry, "((A>B))", &columns(&["A", "B"]), None)
        .unwrap_err();
    assert!(matches!(err, ParseError::NoValidConditions { .. }));
}

#[traced_test]
#[test]
fn test_unknown_reference_is_logged() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    let rule = parser
        .parse(&mut registry, "Rule5 OR Rule6", &columns(&["A"]), Some("partial"))
        .unwrap();

    assert!(rule.is_reference());
    assert!(logs_contain("references 'Rule5'"));
}

#[traced_test]
#[test]
fn test_dropped_segment_is_logged() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();

    parser
        .parse(&mut registry, "A>1 AND Nope<2", &columns(&["A"]), Some("r"))
        .unwrap();

    assert!(logs_contain("Dropping unparseable condition 'Nope<2'"));
}

#[test]
fn test_registry_round_trips_through_rule_set_json() {
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();
    let cols = columns(&["Status", "Active", "Current"]);

    parser
        .parse(&mut registry, "Status=\"Active\"", &cols, Some("Rule1"))
        .unwrap();
    parser
        .parse(&mut registry, "Current >= 2.5 OR Status=Active", &cols, Some("Rule2"))
        .unwrap();
    parser
        .parse(&mut registry, "Rule1 AND Rule2", &cols, Some("main"))
        .unwrap();
    registry.set_enabled("Rule2", false);

    let json = registry.to_rule_set().to_json().unwrap();
    let restored = RuleRegistry::from_rule_set(RuleSet::from_json(&json).unwrap());

    assert_eq!(restored.rules(), registry.rules());
    assert!(restored.get("main").unwrap().is_reference());
    assert!(!restored.get("Rule2").unwrap().enabled);
}
