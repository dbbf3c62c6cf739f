use model::{ConditionType, LogicalOperator};
use std::fmt;

/// Comparison tokens in scan order. Longer tokens come first so `>=` is
/// never split as `>` followed by `=`.
pub const COMPARISON_TOKENS: [ComparisonToken; 7] = [
    ComparisonToken::new(">=", ConditionType::GreaterEqual),
    ComparisonToken::new("<=", ConditionType::LessEqual),
    ComparisonToken::new("!=", ConditionType::NotEqual),
    ComparisonToken::new("==", ConditionType::Equal),
    ComparisonToken::new(">", ConditionType::GreaterThan),
    ComparisonToken::new("<", ConditionType::LessThan),
    ComparisonToken::new("=", ConditionType::Equal),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonToken {
    pub lexeme: &'static str,
    pub operator: ConditionType,
}

impl ComparisonToken {
    pub const fn new(lexeme: &'static str, operator: ConditionType) -> Self {
        ComparisonToken { lexeme, operator }
    }
}

/// A standalone `AND` / `OR` keyword found in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalToken {
    pub operator: LogicalOperator,
    /// Byte offset of the keyword (or its surrounding whitespace) in the source.
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for LogicalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.operator, self.start, self.end)
    }
}
