use model::ValidationResult;
use serde::Serialize;

#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct SummaryReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub rules: Vec<RuleSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureDetail>,
    /// Rules that could not be evaluated because of their references.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reference_errors: Vec<String>,
}

/// Pass/fail counts for one rule, in first-seen order.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct RuleSummary {
    pub rule_name: String,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FailureDetail {
    pub row_index: usize,
    pub rule_name: String,
    pub message: String,
    pub row_data: String,
}

impl SummaryReport {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let mut report = SummaryReport {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            let idx = match report.rules.iter().position(|r| r.rule_name == result.rule_name) {
                Some(idx) => idx,
                None => {
                    report.rules.push(RuleSummary {
                        rule_name: result.rule_name.clone(),
                        ..Default::default()
                    });
                    report.rules.len() - 1
                }
            };

            if result.passed {
                report.passed += 1;
                report.rules[idx].passed += 1;
            } else {
                report.failed += 1;
                report.rules[idx].failed += 1;
                report.failures.push(FailureDetail {
                    row_index: result.row_index,
                    rule_name: result.rule_name.clone(),
                    message: result.message.clone(),
                    row_data: result.row_data.to_string(),
                });
            }
        }

        report
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
