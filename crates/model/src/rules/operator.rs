use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Comparison performed by a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterEqual,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "starts_with")]
    StartsWith,
    #[serde(rename = "ends_with")]
    EndsWith,
}

impl ConditionType {
    pub const ALL: [ConditionType; 9] = [
        ConditionType::GreaterThan,
        ConditionType::LessThan,
        ConditionType::GreaterEqual,
        ConditionType::LessEqual,
        ConditionType::Equal,
        ConditionType::NotEqual,
        ConditionType::Contains,
        ConditionType::StartsWith,
        ConditionType::EndsWith,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ConditionType::GreaterThan => ">",
            ConditionType::LessThan => "<",
            ConditionType::GreaterEqual => ">=",
            ConditionType::LessEqual => "<=",
            ConditionType::Equal => "==",
            ConditionType::NotEqual => "!=",
            ConditionType::Contains => "contains",
            ConditionType::StartsWith => "starts_with",
            ConditionType::EndsWith => "ends_with",
        }
    }

    /// Operator to use when the operands are swapped (`5 < A` is `A > 5`).
    pub fn mirrored(&self) -> ConditionType {
        match self {
            ConditionType::GreaterThan => ConditionType::LessThan,
            ConditionType::LessThan => ConditionType::GreaterThan,
            ConditionType::GreaterEqual => ConditionType::LessEqual,
            ConditionType::LessEqual => ConditionType::GreaterEqual,
            other => *other,
        }
    }

    /// Ordering operators that require both sides to be numeric.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            ConditionType::GreaterThan
                | ConditionType::LessThan
                | ConditionType::GreaterEqual
                | ConditionType::LessEqual
        )
    }

    pub fn is_string_op(&self) -> bool {
        matches!(
            self,
            ConditionType::Contains | ConditionType::StartsWith | ConditionType::EndsWith
        )
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for ConditionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "=" => Ok(ConditionType::Equal),
            other => ConditionType::ALL
                .into_iter()
                .find(|op| op.symbol() == other)
                .ok_or_else(|| ModelError::UnknownConditionType(s.to_string())),
        }
    }
}

/// Connective between two adjacent conditions (or rule references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            LogicalOperator::And => left && right,
            LogicalOperator::Or => left || right,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "and"),
            LogicalOperator::Or => write!(f, "or"),
        }
    }
}

impl FromStr for LogicalOperator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(LogicalOperator::And),
            "or" => Ok(LogicalOperator::Or),
            _ => Err(ModelError::UnknownLogicalOperator(s.to_string())),
        }
    }
}
