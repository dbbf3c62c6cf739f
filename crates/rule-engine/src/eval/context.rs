use super::{Evaluator, combine};
use crate::error::{EngineError, Result};
use model::{RowData, Rule};
use rule_syntax::RuleRegistry;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Resolves rule names for reference rules.
///
/// The rules handed to a validation run take precedence over the registry.
/// Exact names are tried before case-insensitive ones.
#[derive(Debug, Clone, Copy)]
pub struct RuleLookup<'a> {
    rules: &'a [Rule],
    registry: &'a RuleRegistry,
}

impl<'a> RuleLookup<'a> {
    pub fn new(rules: &'a [Rule], registry: &'a RuleRegistry) -> Self {
        RuleLookup { rules, registry }
    }

    pub fn get(&self, name: &str) -> Option<&'a Rule> {
        self.rules
            .iter()
            .find(|r| r.name == name)
            .or_else(|| self.registry.get(name))
            .or_else(|| self.rules.iter().find(|r| r.name.eq_ignore_ascii_case(name)))
            .or_else(|| self.registry.get_ignore_case(name))
    }

    /// Walks every reference reachable from `rule` and fails on the first
    /// name that does not resolve or on a chain that loops back on itself.
    /// Rules without references always pass.
    pub fn check_rule(&self, rule: &'a Rule) -> Result<()> {
        self.visit(rule, &mut Vec::new(), &mut HashSet::new())
    }

    fn visit(
        &self,
        rule: &'a Rule,
        path: &mut Vec<&'a str>,
        done: &mut HashSet<&'a str>,
    ) -> Result<()> {
        if done.contains(rule.name.as_str()) {
            return Ok(());
        }
        if let Some(pos) = path.iter().position(|name| *name == rule.name) {
            let mut chain: Vec<String> = path[pos..].iter().map(|s| s.to_string()).collect();
            chain.push(rule.name.clone());
            return Err(EngineError::CyclicReference { chain });
        }

        path.push(&rule.name);
        for reference in &rule.rule_references {
            let target = self.get(&reference.rule_name).ok_or_else(|| {
                EngineError::UnresolvedReference {
                    rule: rule.name.clone(),
                    reference: reference.rule_name.clone(),
                }
            })?;
            self.visit(target, path, done)?;
        }
        path.pop();

        done.insert(&rule.name);
        Ok(())
    }
}

/// Evaluation state for a single row.
///
/// Outcomes of referenced rules are cached by name, so a rule shared by
/// several reference rules runs once per row. `stack` holds the rules being
/// evaluated, outermost first.
pub struct RuleContext<'a> {
    lookup: RuleLookup<'a>,
    row: &'a RowData,
    memo: HashMap<String, bool>,
    stack: Vec<String>,
}

impl<'a> RuleContext<'a> {
    pub fn new(lookup: RuleLookup<'a>, row: &'a RowData) -> Self {
        RuleContext {
            lookup,
            row,
            memo: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Evaluates `rule` against the row. Fails when one of its references,
    /// direct or transitive, is unknown or circular.
    pub fn evaluate(&mut self, rule: &Rule) -> Result<bool> {
        self.stack.push(rule.name.clone());
        let outcome = self.evaluate_body(rule);
        self.stack.pop();
        outcome
    }

    fn evaluate_body(&mut self, rule: &Rule) -> Result<bool> {
        let outcomes: Vec<bool> = if rule.is_reference() {
            rule.rule_references
                .iter()
                .map(|reference| self.resolve(&rule.name, &reference.rule_name))
                .collect::<Result<_>>()?
        } else {
            rule.conditions
                .iter()
                .map(|condition| condition.evaluate(self.row))
                .collect()
        };
        Ok(combine(&outcomes, &rule.logical_ops))
    }

    fn resolve(&mut self, owner: &str, name: &str) -> Result<bool> {
        let target = self
            .lookup
            .get(name)
            .ok_or_else(|| EngineError::UnresolvedReference {
                rule: owner.to_string(),
                reference: name.to_string(),
            })?;

        if let Some(&cached) = self.memo.get(&target.name) {
            return Ok(cached);
        }
        if let Some(pos) = self.stack.iter().position(|n| *n == target.name) {
            let mut chain = self.stack[pos..].to_vec();
            chain.push(target.name.clone());
            return Err(EngineError::CyclicReference { chain });
        }

        let outcome = self.evaluate(target)?;
        debug!("Referenced rule '{}' evaluated to {}", target.name, outcome);

        self.memo.insert(target.name.clone(), outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{
        Condition, ConditionType, LogicalOperator, Operand, RuleReference, Value,
    };

    fn cond_rule(name: &str, column: &str, op: ConditionType, value: i64) -> Rule {
        Rule::new_conditions(
            name,
            vec![Condition::new(column, op, Operand::Int(value))],
            vec![],
            format!("{name} validation"),
            "",
        )
    }

    fn ref_rule(name: &str, refs: &[&str], ops: Vec<LogicalOperator>) -> Rule {
        Rule::new_reference(
            name,
            refs.iter().map(|r| RuleReference::new(*r)).collect(),
            ops,
            format!("{name} validation"),
            "",
        )
    }

    fn row() -> RowData {
        RowData::from_pairs([("A", Value::Int(5))])
    }

    #[test]
    fn test_lookup_prefers_supplied_rules_then_exact_names() {
        let mut registry = RuleRegistry::new();
        registry.insert(cond_rule("r1", "A", ConditionType::GreaterThan, 100));
        let supplied = vec![cond_rule("r1", "A", ConditionType::GreaterThan, 0)];
        let lookup = RuleLookup::new(&supplied, &registry);

        assert_eq!(lookup.get("r1"), Some(&supplied[0]));
        assert_eq!(lookup.get("R1"), Some(&supplied[0]));
        assert!(lookup.get("r2").is_none());
    }

    #[test]
    fn test_check_rule_reports_unresolved_reference() {
        let registry = RuleRegistry::new();
        let rules = vec![
            ref_rule("main", &["r1", "ghost"], vec![LogicalOperator::And]),
            cond_rule("r1", "A", ConditionType::GreaterThan, 0),
        ];
        let lookup = RuleLookup::new(&rules, &registry);

        assert_eq!(
            lookup.check_rule(&rules[0]),
            Err(EngineError::UnresolvedReference {
                rule: "main".into(),
                reference: "ghost".into()
            })
        );
        assert!(lookup.check_rule(&rules[1]).is_ok());
    }

    #[test]
    fn test_check_rule_reports_cycle_chain() {
        let registry = RuleRegistry::new();
        let rules = vec![
            ref_rule("a", &["b"], vec![]),
            ref_rule("b", &["c"], vec![]),
            ref_rule("c", &["a"], vec![]),
        ];

        let err = RuleLookup::new(&rules, &registry)
            .check_rule(&rules[0])
            .unwrap_err();
        assert_eq!(err.to_string(), "Circular rule reference: a -> b -> c -> a");
    }

    #[test]
    fn test_rule_leading_into_a_cycle_fails_its_check() {
        let registry = RuleRegistry::new();
        let rules = vec![
            ref_rule("top", &["loop"], vec![]),
            ref_rule("loop", &["loop"], vec![]),
        ];
        let err = RuleLookup::new(&rules, &registry)
            .check_rule(&rules[0])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::CyclicReference {
                chain: vec!["loop".into(), "loop".into()]
            }
        );
    }

    #[test]
    fn test_shared_reference_is_not_a_cycle() {
        let registry = RuleRegistry::new();
        let rules = vec![
            ref_rule("top", &["left", "right"], vec![LogicalOperator::And]),
            ref_rule("left", &["leaf"], vec![]),
            ref_rule("right", &["leaf"], vec![]),
            cond_rule("leaf", "A", ConditionType::GreaterThan, 0),
        ];
        assert!(RuleLookup::new(&rules, &registry).check_rule(&rules[0]).is_ok());
    }

    #[test]
    fn test_context_combines_referenced_outcomes() {
        let mut registry = RuleRegistry::new();
        registry.insert(cond_rule("pos", "A", ConditionType::GreaterThan, 0));
        registry.insert(cond_rule("big", "A", ConditionType::GreaterThan, 100));
        let rules = vec![
            ref_rule("both", &["pos", "big"], vec![LogicalOperator::And]),
            ref_rule("either", &["pos", "big"], vec![LogicalOperator::Or]),
        ];
        let row = row();
        let lookup = RuleLookup::new(&rules, &registry);

        let mut ctx = RuleContext::new(lookup, &row);
        assert_eq!(ctx.evaluate(&rules[0]), Ok(false));
        assert_eq!(ctx.evaluate(&rules[1]), Ok(true));
        assert_eq!(ctx.memo.len(), 2);
    }

    #[test]
    fn test_context_reports_unknown_reference() {
        let registry = RuleRegistry::new();
        let rules = vec![ref_rule("main", &["Rule9"], vec![])];
        let row = row();

        let mut ctx = RuleContext::new(RuleLookup::new(&rules, &registry), &row);
        assert_eq!(
            ctx.evaluate(&rules[0]),
            Err(EngineError::UnresolvedReference {
                rule: "main".into(),
                reference: "Rule9".into()
            })
        );
    }

    #[test]
    fn test_context_reports_cycle_without_recursing_forever() {
        let registry = RuleRegistry::new();
        let rules = vec![
            ref_rule("a", &["b"], vec![]),
            ref_rule("b", &["a"], vec![]),
        ];
        let row = row();

        let mut ctx = RuleContext::new(RuleLookup::new(&rules, &registry), &row);
        let err = ctx.evaluate(&rules[0]).unwrap_err();
        assert_eq!(err.to_string(), "Circular rule reference: a -> b -> a");
        assert!(ctx.stack.is_empty());
        assert!(ctx.memo.is_empty());
    }
}
