use crate::lexer::{scan_spaced_logical_ops, split_at_tokens};
use model::{LogicalOperator, RuleReference};
use regex::Regex;
use std::sync::LazyLock;

/// `Rule<digits> (AND|OR) Rule<digits>` anchored at the start of the expression.
static REFERENCE_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Rule\d+\s+(and|or)\s+Rule\d+").expect("valid regex"));

static REFERENCE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Rule\d+$").expect("valid regex"));

/// Whether the expression is a chain of rule references instead of conditions.
pub fn is_reference_expression(expression: &str) -> bool {
    REFERENCE_HEAD_RE.is_match(expression.trim())
}

/// Splits a reference expression into its operators and references, in order.
/// Segments that are not `Rule<digits>` are skipped; their operators are kept.
pub fn parse_references(expression: &str) -> (Vec<RuleReference>, Vec<LogicalOperator>) {
    let expression = expression.trim();
    let tokens = scan_spaced_logical_ops(expression);
    let logical_ops = tokens.iter().map(|t| t.operator).collect();

    let references = split_at_tokens(expression, &tokens)
        .into_iter()
        .map(str::trim)
        .filter(|segment| REFERENCE_NAME_RE.is_match(segment))
        .map(RuleReference::new)
        .collect();

    (references, logical_ops)
}
