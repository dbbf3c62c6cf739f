use crate::{
    error::ParseError,
    lexer::{scan_logical_ops, split_at_tokens},
    registry::RuleRegistry,
};
use model::Rule;
use tracing::{debug, warn};

pub mod condition;
pub mod naming;
pub mod reference;

pub use condition::{parse_condition, resolve_column, resolve_operand};
pub use naming::derive_rule_name;
pub use reference::{is_reference_expression, parse_references};

/// Compiles rule expressions into [`Rule`]s and records them in a registry.
#[derive(Debug, Default)]
pub struct RuleParser {
    /// Counter behind `rule_<n>` names for expressions that yield no name.
    auto_id: usize,
}

/// Outcome of one line handed to [`RuleParser::parse_many`].
#[derive(Debug)]
pub struct ParsedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub expression: String,
    pub result: Result<Rule, ParseError>,
}

impl RuleParser {
    pub fn new() -> Self {
        RuleParser { auto_id: 0 }
    }

    /// Parses `expression` against `columns` and registers the resulting rule.
    ///
    /// With an explicit `rule_name`, a rule of the same name is replaced. A
    /// derived name that is already taken gets a numeric suffix instead.
    pub fn parse(
        &mut self,
        registry: &mut RuleRegistry,
        expression: &str,
        columns: &[String],
        rule_name: Option<&str>,
    ) -> Result<Rule, ParseError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let name = match rule_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None => self.unique_name(registry, expression),
        };

        let rule = if is_reference_expression(expression) {
            self.build_reference_rule(registry, name, expression)
        } else {
            self.build_condition_rule(name, expression, columns)?
        };

        debug!(
            "Parsed rule '{}': {} condition(s), {} reference(s), {} operator(s)",
            rule.name,
            rule.conditions.len(),
            rule.rule_references.len(),
            rule.logical_ops.len()
        );

        registry.insert(rule.clone());
        Ok(rule)
    }

    /// Parses one expression per line. Blank lines and `#` comments are
    /// skipped; a failing line is reported and the rest still parse.
    ///
    /// Accepted lines are named `Rule<n>`, where `n` follows the number of
    /// rules already registered, so later lines can reference earlier ones
    /// (`Rule1 AND Rule2`).
    pub fn parse_many<'a, I>(
        &mut self,
        registry: &mut RuleRegistry,
        lines: I,
        columns: &[String],
    ) -> Vec<ParsedLine>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let line_text = line.trim();
                if line_text.is_empty() || line_text.starts_with('#') {
                    return None;
                }
                let name = sequential_name(registry);
                let result = self.parse(registry, line_text, columns, Some(name.as_str()));
                if let Err(err) = &result {
                    warn!("Rule on line {} failed to parse: {}", idx + 1, err);
                }
                Some(ParsedLine {
                    line: idx + 1,
                    expression: line_text.to_string(),
                    result,
                })
            })
            .collect()
    }

    fn build_reference_rule(&self, registry: &RuleRegistry, name: String, expression: &str) -> Rule {
        let (references, logical_ops) = parse_references(expression);

        for reference in &references {
            if registry.get_ignore_case(&reference.rule_name).is_none() {
                warn!(
                    "Rule '{}' references '{}', which is not defined yet",
                    name, reference.rule_name
                );
            }
        }

        let action = format!("{name} validation");
        Rule::new_reference(name, references, logical_ops, action, expression)
    }

    fn build_condition_rule(
        &self,
        name: String,
        expression: &str,
        columns: &[String],
    ) -> Result<Rule, ParseError> {
        let tokens = scan_logical_ops(expression);
        let logical_ops = tokens.iter().map(|t| t.operator).collect();

        let mut conditions = Vec::new();
        for segment in split_at_tokens(expression, &tokens) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            match condition::parse_condition(segment, columns) {
                Some(condition) => conditions.push(condition),
                None => warn!("Dropping unparseable condition '{}' in rule '{}'", segment, name),
            }
        }

        if conditions.is_empty() {
            return Err(ParseError::no_valid_conditions(expression));
        }

        let action = format!("{name} validation");
        Ok(Rule::new_conditions(
            name,
            conditions,
            logical_ops,
            action,
            expression,
        ))
    }

    fn unique_name(&mut self, registry: &RuleRegistry, expression: &str) -> String {
        match derive_rule_name(expression) {
            Some(base) if !registry.contains(&base) => base,
            Some(base) => (2..)
                .map(|n| format!("{base}_{n}"))
                .find(|candidate| !registry.contains(candidate))
                .unwrap_or(base),
            None => loop {
                self.auto_id += 1;
                let candidate = format!("rule_{}", self.auto_id);
                if !registry.contains(&candidate) {
                    break candidate;
                }
            },
        }
    }
}

/// First free `Rule<n>` name, counting on from the registry's size.
fn sequential_name(registry: &RuleRegistry) -> String {
    (registry.len() + 1..)
        .map(|n| format!("Rule{n}"))
        .find(|candidate| !registry.contains(candidate))
        .unwrap_or_else(|| format!("Rule{}", registry.len() + 1))
}
