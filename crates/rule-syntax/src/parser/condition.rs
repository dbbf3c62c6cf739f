use crate::lexer::{find_comparison, strip_outer_parens, unquote};
use model::{Condition, ConditionType, Operand};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Any string-operator keyword appearing as a word.
static STRING_OP_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(contains|starts_with|ends_with)\b").expect("valid regex")
});

/// `<column> <string-op> "<text>"` with single or double quotes.
static STRING_OP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)^(.+?)\s+(contains|starts_with|ends_with)\s+(?:"(.*)"|'(.*)')$"#)
        .expect("valid regex")
});

/// Parses one condition segment. Returns `None` when the segment has no
/// recognizable shape or names no known column; callers drop such segments.
pub fn parse_condition(segment: &str, columns: &[String]) -> Option<Condition> {
    let text = strip_outer_parens(segment);
    if text.is_empty() {
        return None;
    }

    if STRING_OP_WORD_RE.is_match(text) {
        return parse_string_condition(text, columns);
    }

    parse_comparison(text, columns)
}

fn parse_string_condition(text: &str, columns: &[String]) -> Option<Condition> {
    let Some(caps) = STRING_OP_RE.captures(text) else {
        debug!("String condition '{}' is not of the form <column> <op> \"text\"", text);
        return None;
    };

    let column = resolve_column(caps.get(1)?.as_str().trim(), columns)?;
    let operator = match caps.get(2)?.as_str().to_ascii_lowercase().as_str() {
        "contains" => ConditionType::Contains,
        "starts_with" => ConditionType::StartsWith,
        "ends_with" => ConditionType::EndsWith,
        _ => return None,
    };
    let needle = caps.get(3).or_else(|| caps.get(4))?.as_str();

    Some(Condition::new(
        column,
        operator,
        Operand::Literal(needle.to_string()),
    ))
}

fn parse_comparison(text: &str, columns: &[String]) -> Option<Condition> {
    let (token, pos) = find_comparison(text)?;
    let left = text[..pos].trim();
    let right = text[pos + token.lexeme.len()..].trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }

    if let Some(column) = resolve_column(left, columns) {
        return Some(Condition::new(
            column,
            token.operator,
            resolve_operand(right, columns),
        ));
    }

    // Column on the right-hand side: swap operands and mirror the operator.
    if let Some(column) = resolve_column(right, columns) {
        return Some(Condition::new(
            column,
            token.operator.mirrored(),
            resolve_operand(left, columns),
        ));
    }

    debug!("Neither side of '{}' names a known column", text);
    None
}

/// Matches a column token against the known columns: the first
/// case-insensitive hit in column order wins, then an exact match.
pub fn resolve_column(token: &str, columns: &[String]) -> Option<String> {
    let lowered = token.to_lowercase();
    columns
        .iter()
        .find(|col| col.to_lowercase() == lowered)
        .or_else(|| columns.iter().find(|col| col.as_str() == token))
        .cloned()
}

/// Resolves the value side of a comparison. Order matters and never changes:
/// quoted literal, exact column name, integer, float, bare text.
pub fn resolve_operand(raw: &str, columns: &[String]) -> Operand {
    let raw = raw.trim();

    if let Some(literal) = unquote(raw) {
        return Operand::Literal(literal.to_string());
    }

    if columns.iter().any(|col| col == raw) {
        return Operand::Column(raw.to_string());
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Operand::Int(i);
    }

    if raw.bytes().any(|b| b.is_ascii_digit())
        && let Ok(f) = raw.parse::<f64>()
    {
        return Operand::Float(f);
    }

    Operand::Text(raw.to_string())
}
