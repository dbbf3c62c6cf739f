use crate::{error::ModelError, rules::rule::Rule};
use serde::{Deserialize, Serialize};

pub const RULE_SET_VERSION: u32 = 1;

/// Persisted form of a set of rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default = "default_version")]
    pub version: u32,
    pub rules: Vec<Rule>,
}

fn default_version() -> u32 {
    RULE_SET_VERSION
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet {
            version: RULE_SET_VERSION,
            rules,
        }
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{
        condition::{Condition, RuleReference},
        operand::Operand,
        operator::{ConditionType, LogicalOperator},
    };

    fn sample_rules() -> Vec<Rule> {
        let mut status = Rule::new_conditions(
            "Rule1",
            vec![
                Condition::new("Status", ConditionType::Equal, Operand::Literal("Active".into())),
                Condition::new("Current", ConditionType::GreaterThan, Operand::Float(2.5)),
                Condition::new("Current", ConditionType::LessEqual, Operand::Column("Max".into())),
                Condition::new("Tag", ConditionType::StartsWith, Operand::Literal("cc_".into())),
                Condition::new("Level", ConditionType::NotEqual, Operand::Int(3)),
                Condition::new("Flag", ConditionType::Equal, Operand::Text("YES".into())),
            ],
            vec![
                LogicalOperator::And,
                LogicalOperator::Or,
                LogicalOperator::And,
                LogicalOperator::And,
                LogicalOperator::Or,
            ],
            "Rule1 validation",
            "Status=\"Active\" AND ...",
        );
        status.enabled = false;

        let main = Rule::new_reference(
            "main",
            vec![RuleReference::new("Rule1"), RuleReference::new("Rule2")],
            vec![LogicalOperator::And],
            "main validation",
            "Rule1 AND Rule2",
        );

        vec![status, main]
    }

    #[test]
    fn test_rule_set_survives_json() {
        let set = RuleSet::new(sample_rules());
        let json = set.to_json().unwrap();
        let restored = RuleSet::from_json(&json).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn test_operator_tags_are_symbols_in_json() {
        let json = RuleSet::new(sample_rules()).to_json().unwrap();
        assert!(json.contains("\"operator\": \"==\""));
        assert!(json.contains("\"operator\": \"starts_with\""));
        assert!(json.contains("\"kind\": \"column\""));
        assert!(json.contains("\"and\""));
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let json = r#"{"rules":[{"name":"r","action":"a","conditions":[
            {"column":"A","operator":"~","value":{"kind":"int","value":1}}]}]}"#;
        assert!(RuleSet::from_json(json).is_err());
    }
}
