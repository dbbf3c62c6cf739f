use crate::{
    error::EngineError,
    eval::{RuleContext, RuleLookup},
    report::{SummaryReport, render_text_report},
};
use model::{Rule, Table, ValidationResult};
use rule_syntax::RuleRegistry;
use tracing::{debug, info, warn};

/// Applies rules to table rows and keeps the outcome of the last run.
#[derive(Debug, Default)]
pub struct RuleEngine {
    results: Vec<ValidationResult>,
    reference_errors: Vec<EngineError>,
}

impl RuleEngine {
    pub fn new() -> Self {
        RuleEngine {
            results: Vec::new(),
            reference_errors: Vec::new(),
        }
    }

    /// Evaluates every rule against every row, row-major, producing
    /// `rows × rules` results.
    ///
    /// Reference rules are resolved against `rules` first and then
    /// `registry`. A rule whose references are unknown or circular fails on
    /// every row with a "not evaluated" message and its error is kept in
    /// [`RuleEngine::reference_errors`]; the other rules are unaffected.
    pub fn validate(
        &mut self,
        table: &Table,
        rules: &[Rule],
        registry: &RuleRegistry,
    ) -> &[ValidationResult] {
        self.results.clear();
        self.reference_errors.clear();

        let lookup = RuleLookup::new(rules, registry);
        let checks: Vec<Option<EngineError>> = rules
            .iter()
            .map(|rule| lookup.check_rule(rule).err())
            .collect();
        for err in checks.iter().flatten() {
            warn!("{}", err);
            self.reference_errors.push(err.clone());
        }

        self.results.reserve(table.len() * rules.len());
        for (row_index, row) in table.rows.iter().enumerate() {
            let mut ctx = RuleContext::new(lookup, row);
            for (rule, check) in rules.iter().zip(&checks) {
                let outcome = match check {
                    Some(err) => Err(err.clone()),
                    None => ctx.evaluate(rule),
                };
                let result = match outcome {
                    Ok(true) => ValidationResult::pass(row_index, &rule.name, &rule.action, row),
                    Ok(false) => ValidationResult::fail(row_index, &rule.name, row),
                    Err(err) => ValidationResult::error(row_index, &rule.name, err, row),
                };
                self.results.push(result);
            }
            debug!("Row {} evaluated against {} rule(s)", row_index, rules.len());
        }

        info!(
            "Validated {} row(s) against {} rule(s): {} passed, {} failed",
            table.len(),
            rules.len(),
            self.passed().len(),
            self.failed().len()
        );

        &self.results
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Reference problems found by the last run, one per affected rule.
    pub fn reference_errors(&self) -> &[EngineError] {
        &self.reference_errors
    }

    pub fn passed(&self) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| r.passed).collect()
    }

    pub fn failed(&self) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    pub fn summary(&self) -> SummaryReport {
        let mut summary = SummaryReport::from_results(&self.results);
        summary.reference_errors = self.reference_errors.iter().map(|e| e.to_string()).collect();
        summary
    }

    pub fn generate_report(&self) -> String {
        render_text_report(&self.results)
    }
}
