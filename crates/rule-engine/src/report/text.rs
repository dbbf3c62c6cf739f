use model::ValidationResult;

const REPORT_WIDTH: usize = 80;

/// Renders the plain-text validation report.
///
/// The failure section is only present when at least one result failed.
pub fn render_text_report(results: &[ValidationResult]) -> String {
    let heavy = "=".repeat(REPORT_WIDTH);
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    let mut lines = vec![
        heavy.clone(),
        "VALIDATION REPORT".to_string(),
        heavy.clone(),
        format!("Total validations: {}", results.len()),
        format!("Passed: {passed}"),
        format!("Failed: {failed}"),
        heavy,
    ];

    if failed > 0 {
        lines.push("\nFAILED VALIDATIONS:".to_string());
        lines.push("-".repeat(REPORT_WIDTH));
        for result in results.iter().filter(|r| !r.passed) {
            lines.push(format!("\n{}", result.message));
            lines.push(format!("Rule: {}", result.rule_name));
            lines.push(format!("Row data: {}", result.row_data));
        }
    }

    lines.join("\n")
}
