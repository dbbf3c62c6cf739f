//! Scanning helpers shared by the condition and reference parsers.

use crate::lexer::token::{COMPARISON_TOKENS, ComparisonToken, LogicalToken};
use model::LogicalOperator;
use regex::{Captures, Regex};
use std::sync::LazyLock;

pub mod token;

/// Standalone `AND` / `OR` between conditions.
static LOGICAL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(and|or)\b").expect("valid regex"));

/// Whitespace-delimited `AND` / `OR` between rule references.
static LOGICAL_SPACED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(and|or)\s+").expect("valid regex"));

/// Locates every standalone `AND` / `OR` keyword, left to right.
pub fn scan_logical_ops(input: &str) -> Vec<LogicalToken> {
    collect_tokens(&LOGICAL_WORD_RE, input)
}

/// Like [`scan_logical_ops`], but the keyword must be surrounded by whitespace.
/// The token span covers the whitespace too.
pub fn scan_spaced_logical_ops(input: &str) -> Vec<LogicalToken> {
    collect_tokens(&LOGICAL_SPACED_RE, input)
}

fn collect_tokens(re: &Regex, input: &str) -> Vec<LogicalToken> {
    re.captures_iter(input)
        .filter_map(|caps| to_logical_token(&caps))
        .collect()
}

fn to_logical_token(caps: &Captures<'_>) -> Option<LogicalToken> {
    let whole = caps.get(0)?;
    let keyword = caps.get(1)?;
    let operator = keyword.as_str().parse::<LogicalOperator>().ok()?;
    Some(LogicalToken {
        operator,
        start: whole.start(),
        end: whole.end(),
    })
}

/// Splits `input` around the given tokens, returning the text between them.
/// The result always has `tokens.len() + 1` entries, some possibly empty.
pub fn split_at_tokens<'a>(input: &'a str, tokens: &[LogicalToken]) -> Vec<&'a str> {
    let mut segments = Vec::with_capacity(tokens.len() + 1);
    let mut cursor = 0;
    for token in tokens {
        segments.push(&input[cursor..token.start]);
        cursor = token.end;
    }
    segments.push(&input[cursor..]);
    segments
}

/// Removes one pair of parentheses when that pair wraps the whole segment.
/// `(A>B)` becomes `A>B`; `(A)>(B)` and `((A>B))`'s inner pair are left alone.
pub fn strip_outer_parens(segment: &str) -> &str {
    let trimmed = segment.trim();
    if !(trimmed.starts_with('(') && trimmed.ends_with(')')) || trimmed.len() < 2 {
        return trimmed;
    }

    let mut depth = 0usize;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && idx != trimmed.len() - 1 {
                    // The opening paren closes before the end of the segment.
                    return trimmed;
                }
            }
            _ => {}
        }
    }

    trimmed[1..trimmed.len() - 1].trim()
}

/// Returns the text between matching single or double quotes, if `raw` is quoted.
pub fn unquote(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let mut chars = raw.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if (first == '"' || first == '\'') && first == last {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}

/// Finds the first comparison token (in scan order) present in `segment`
/// and the byte offset of its first occurrence.
pub fn find_comparison(segment: &str) -> Option<(ComparisonToken, usize)> {
    COMPARISON_TOKENS
        .iter()
        .find_map(|token| segment.find(token.lexeme).map(|pos| (*token, pos)))
}
