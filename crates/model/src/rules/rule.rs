use crate::rules::{
    condition::{Condition, RuleReference},
    operator::LogicalOperator,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named validation rule.
///
/// A rule is either a *condition rule* (non-empty `conditions`, no references)
/// or a *reference rule* (no conditions, non-empty `rule_references`).
/// `logical_ops[i]` joins item `i` and item `i + 1` of whichever list is in use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub logical_ops: Vec<LogicalOperator>,
    pub action: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rule_references: Vec<RuleReference>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    pub fn new_conditions(
        name: impl Into<String>,
        conditions: Vec<Condition>,
        logical_ops: Vec<LogicalOperator>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Rule {
            name: name.into(),
            conditions,
            logical_ops,
            action: action.into(),
            description: description.into(),
            rule_references: Vec::new(),
            enabled: true,
        }
    }

    pub fn new_reference(
        name: impl Into<String>,
        rule_references: Vec<RuleReference>,
        logical_ops: Vec<LogicalOperator>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Rule {
            name: name.into(),
            conditions: Vec::new(),
            logical_ops,
            action: action.into(),
            description: description.into(),
            rule_references,
            enabled: true,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.conditions.is_empty() && !self.rule_references.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = if self.is_reference() {
            self.rule_references.iter().map(|r| r.to_string()).collect()
        } else {
            self.conditions.iter().map(|c| c.to_string()).collect()
        };

        let mut body = String::new();
        for (i, item) in items.iter().enumerate() {
            body.push_str(item);
            if i + 1 < items.len()
                && let Some(op) = self.logical_ops.get(i)
            {
                body.push_str(&format!(" {op} "));
            }
        }

        writeln!(f, "Rule: {}", self.name)?;
        if self.is_reference() {
            writeln!(f, "References: {body}")?;
        } else {
            writeln!(f, "Conditions: {body}")?;
        }
        write!(f, "Action: {}", self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{operand::Operand, operator::ConditionType};

    #[test]
    fn test_display_condition_rule() {
        let rule = Rule::new_conditions(
            "current_check",
            vec![
                Condition::new("A", ConditionType::GreaterThan, Operand::Column("B".into())),
                Condition::new("X", ConditionType::Equal, Operand::Literal("on".into())),
            ],
            vec![LogicalOperator::And],
            "current_check validation",
            "(A>B) AND (X=\"on\")",
        );

        assert_eq!(
            rule.to_string(),
            "Rule: current_check\nConditions: A > B and X == \"on\"\nAction: current_check validation"
        );
        assert!(!rule.is_reference());
    }

    #[test]
    fn test_reference_rule_shape() {
        let rule = Rule::new_reference(
            "main",
            vec![RuleReference::new("Rule1"), RuleReference::new("Rule2")],
            vec![LogicalOperator::Or],
            "main validation",
            "Rule1 OR Rule2",
        );
        assert!(rule.is_reference());
        assert!(rule.conditions.is_empty());
        assert!(rule.to_string().contains("References: Rule1 or Rule2"));
    }

    #[test]
    fn test_enabled_defaults_to_true_when_missing() {
        let json = r#"{"name":"r","action":"r validation"}"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(rule.enabled);
        assert!(rule.conditions.is_empty());
    }
}
