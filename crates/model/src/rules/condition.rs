use crate::rules::{operand::Operand, operator::ConditionType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One `column <operator> value` comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub operator: ConditionType,
    pub value: Operand,
}

impl Condition {
    pub fn new(column: impl Into<String>, operator: ConditionType, value: Operand) -> Self {
        Condition {
            column: column.into(),
            operator,
            value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

/// Reference to another named rule inside a reference rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleReference {
    pub rule_name: String,
}

impl RuleReference {
    pub fn new(rule_name: impl Into<String>) -> Self {
        RuleReference {
            rule_name: rule_name.into(),
        }
    }
}

impl fmt::Display for RuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule_name)
    }
}
