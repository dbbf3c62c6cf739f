use model::{Rule, RuleSet};
use std::collections::HashMap;
use tracing::debug;

/// Name-indexed store of every parsed rule.
///
/// `rules` keeps insertion order; `rules_by_name` maps each name to its
/// position in `rules` and is rebuilt whenever positions shift.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    rules_by_name: HashMap<String, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        RuleRegistry {
            rules: Vec::new(),
            rules_by_name: HashMap::new(),
        }
    }

    /// Adds a rule. A rule with the same name is replaced in place and returned.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        if let Some(&idx) = self.rules_by_name.get(&rule.name) {
            debug!("Replacing rule '{}'", rule.name);
            return Some(std::mem::replace(&mut self.rules[idx], rule));
        }

        self.rules_by_name.insert(rule.name.clone(), self.rules.len());
        self.rules.push(rule);
        None
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules_by_name.get(name).map(|&idx| &self.rules[idx])
    }

    /// Exact lookup first, then the first rule whose name matches ignoring case.
    pub fn get_ignore_case(&self, name: &str) -> Option<&Rule> {
        self.get(name).or_else(|| {
            self.rules
                .iter()
                .find(|rule| rule.name.eq_ignore_ascii_case(name))
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules_by_name.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Rule> {
        let idx = self.rules_by_name.remove(name)?;
        let removed = self.rules.remove(idx);
        self.reindex();
        Some(removed)
    }

    /// Replaces the rule called `name` with `rule`, which may carry a new name.
    /// If the new name belongs to a different rule, that rule is dropped.
    /// Returns the previous rule, or `None` (and does nothing) if `name` is unknown.
    pub fn replace(&mut self, name: &str, rule: Rule) -> Option<Rule> {
        let idx = *self.rules_by_name.get(name)?;

        if rule.name != name
            && let Some(&clash) = self.rules_by_name.get(&rule.name)
        {
            let previous = std::mem::replace(&mut self.rules[idx], rule);
            self.rules.remove(clash);
            self.reindex();
            return Some(previous);
        }

        let previous = std::mem::replace(&mut self.rules[idx], rule);
        self.reindex();
        Some(previous)
    }

    /// Toggles a rule; returns `false` if no rule has that name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.rules_by_name.get(name) {
            Some(&idx) => {
                self.rules[idx].enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn enabled_rules(&self) -> Vec<Rule> {
        self.rules.iter().filter(|r| r.enabled).cloned().collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
        self.rules_by_name.clear();
    }

    pub fn to_rule_set(&self) -> RuleSet {
        RuleSet::new(self.rules.clone())
    }

    /// Rebuilds a registry (and its name index) from a persisted rule set.
    /// Later duplicates replace earlier ones.
    pub fn from_rule_set(set: RuleSet) -> Self {
        let mut registry = RuleRegistry::new();
        for rule in set.rules {
            registry.insert(rule);
        }
        registry
    }

    fn reindex(&mut self) {
        self.rules_by_name = self
            .rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| (rule.name.clone(), idx))
            .collect();
    }
}
