use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::{
    CsvSettings, CsvTableReader, TableSource, load_rule_lines, load_rule_set, save_rule_set,
};
use rule_engine::RuleEngine;
use rule_syntax::{RuleParser, RuleRegistry};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "rulecheck", version = "0.1.0", about = "Rule-based validation of tabular data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

struct ValidateArgs {
    data: String,
    rules: Option<String>,
    rule_set: Option<String>,
    settings: CsvSettings,
    output: Option<String>,
    json: bool,
    save_rule_set: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, CliError> {
    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            data,
            rules,
            rule_set,
            header_row,
            delimiter,
            output,
            json,
            save_rule_set,
        } => {
            let args = ValidateArgs {
                data,
                rules,
                rule_set,
                settings: CsvSettings::new(delimiter, true).with_header_row(header_row),
                output,
                json,
                save_rule_set,
            };
            let clean = run_validate(args).await?;
            return Ok(if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Commands::Parse {
            columns,
            name,
            expression,
        } => {
            let columns: Vec<String> = columns.iter().map(|c| c.trim().to_string()).collect();
            let mut registry = RuleRegistry::new();
            let rule = RuleParser::new().parse(
                &mut registry,
                &expression,
                &columns,
                name.as_deref(),
            )?;
            println!("{}", serde_json::to_string_pretty(&rule)?);
        }
        Commands::Rules { rule_set } => {
            let set = load_rule_set(&rule_set)?;
            for rule in &set.rules {
                let flag = if rule.enabled { "x" } else { " " };
                println!("[{flag}] {:<30} {}", rule.name, rule.description);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads data and rules, validates, and reports. Returns `true` when no
/// validation failed.
async fn run_validate(args: ValidateArgs) -> Result<bool, CliError> {
    if args.rules.is_none() && args.rule_set.is_none() {
        return Err(CliError::NoRules);
    }

    let table = CsvTableReader::new(&args.data, args.settings).read_table()?;

    let mut registry = match &args.rule_set {
        Some(path) => RuleRegistry::from_rule_set(load_rule_set(path)?),
        None => RuleRegistry::new(),
    };

    if let Some(path) = &args.rules {
        let lines = load_rule_lines(path)?;
        let parsed = RuleParser::new().parse_many(
            &mut registry,
            lines.iter().map(String::as_str),
            table.columns(),
        );
        let rejected = parsed.iter().filter(|p| p.result.is_err()).count();
        if rejected > 0 {
            warn!("{} of {} rule line(s) were rejected", rejected, parsed.len());
        }
    }

    if let Some(path) = &args.save_rule_set {
        save_rule_set(path, &registry.to_rule_set())?;
    }

    let rules = registry.enabled_rules();
    info!("Running {} enabled rule(s)", rules.len());

    let mut engine = RuleEngine::new();
    engine.validate(&table, &rules, &registry);
    for err in engine.reference_errors() {
        warn!("Rule skipped: {}", err);
    }

    let report = output::render_report(&engine, args.json)?;
    output::print_report(&report);
    if let Some(path) = &args.output {
        output::write_report(&report, path).await?;
    }

    Ok(engine.failed().is_empty())
}
