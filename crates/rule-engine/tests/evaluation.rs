//! Evaluation properties checked through parsed expressions.

use model::{LogicalOperator, RowData, Table, Value};
use rule_engine::{RuleEngine, combine};
use rule_syntax::{RuleParser, RuleRegistry};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn passed_for(expression: &str, cols: &[&str], rows: Vec<RowData>) -> Vec<bool> {
    let cols = columns(cols);
    let mut parser = RuleParser::new();
    let mut registry = RuleRegistry::new();
    let rule = parser
        .parse(&mut registry, expression, &cols, Some("under_test"))
        .unwrap();

    let table = Table::with_rows(cols, rows);
    let mut engine = RuleEngine::new();
    engine
        .validate(&table, &[rule], &registry)
        .iter()
        .map(|r| r.passed)
        .collect()
}

#[test]
fn test_combine_identity_cases() {
    assert!(!combine(&[], &[]));
    for x in [true, false] {
        assert_eq!(combine(&[x], &[]), x);
    }
}

#[test]
fn test_expression_folds_left_to_right() {
    // true OR false AND false => (true OR false) AND false => false
    let rows = vec![RowData::from_pairs([
        ("A", Value::Int(1)),
        ("B", Value::Int(0)),
        ("C", Value::Int(0)),
    ])];
    assert_eq!(
        passed_for("A=1 OR B=1 AND C=1", &["A", "B", "C"], rows),
        vec![false]
    );

    let ops = [LogicalOperator::Or, LogicalOperator::And];
    for c0 in [true, false] {
        for c1 in [true, false] {
            for c2 in [true, false] {
                assert_eq!(combine(&[c0, c1, c2], &ops), (c0 || c1) && c2);
            }
        }
    }
}

#[test]
fn test_not_equal_mirrors_equal_per_row() {
    let rows: Vec<RowData> = [
        Value::Int(3),
        Value::Float(3.0),
        Value::from(" 3 "),
        Value::from("three"),
        Value::from("THREE"),
        Value::Null,
    ]
    .into_iter()
    .map(|v| RowData::from_pairs([("A", v)]))
    .collect();

    for rhs in ["3", "'three'", "3.5"] {
        let eq = passed_for(&format!("A = {rhs}"), &["A"], rows.clone());
        let ne = passed_for(&format!("A != {rhs}"), &["A"], rows.clone());
        let negated: Vec<bool> = eq.iter().map(|b| !b).collect();
        assert_eq!(ne, negated, "A != {rhs}");
    }
}

#[test]
fn test_column_versus_literal() {
    let rows = vec![
        RowData::from_pairs([("A", Value::from("B")), ("B", Value::from("x"))]),
        RowData::from_pairs([("A", Value::from("x")), ("B", Value::from("x"))]),
    ];

    assert_eq!(passed_for("A=B", &["A", "B"], rows.clone()), vec![false, true]);
    assert_eq!(passed_for("A=\"B\"", &["A", "B"], rows), vec![true, false]);
}

#[test]
fn test_non_numeric_ordering_fails_the_row() {
    let rows = vec![
        RowData::from_pairs([("A", Value::from("n/a"))]),
        RowData::from_pairs([("A", Value::from("12"))]),
    ];
    assert_eq!(passed_for("A > 10", &["A"], rows), vec![false, true]);
}

#[test]
fn test_mirrored_comparison() {
    let rows = vec![
        RowData::from_pairs([("A", Value::Int(7))]),
        RowData::from_pairs([("A", Value::Int(2))]),
    ];
    assert_eq!(passed_for("5 < A", &["A"], rows), vec![true, false]);
}
