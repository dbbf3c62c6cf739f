use crate::error::CliError;
use rule_engine::RuleEngine;
use tracing::info;

/// Renders the last run as text, or as the JSON summary.
pub fn render_report(engine: &RuleEngine, as_json: bool) -> Result<String, CliError> {
    if as_json {
        Ok(serde_json::to_string_pretty(&engine.summary())?)
    } else {
        Ok(engine.generate_report())
    }
}

pub async fn write_report(report: &str, path: &str) -> Result<(), CliError> {
    tokio::fs::write(path, report).await?;
    info!("Report written to {}", path);
    Ok(())
}

pub fn print_report(report: &str) {
    println!("{report}");
}
