use model::{RowData, Rule, Table, ValidationResult, Value};
use rule_engine::RuleEngine;
use rule_syntax::{RuleParser, RuleRegistry};

/// Parsed rules plus the registry they were recorded in.
pub struct Workbench {
    pub table: Table,
    pub parser: RuleParser,
    pub registry: RuleRegistry,
    pub rules: Vec<Rule>,
}

impl Workbench {
    pub fn new(table: Table) -> Self {
        Workbench {
            table,
            parser: RuleParser::new(),
            registry: RuleRegistry::new(),
            rules: Vec::new(),
        }
    }

    /// Parses `expression` against the table's columns and queues it for
    /// validation.
    pub fn rule(&mut self, expression: &str, name: Option<&str>) -> &mut Self {
        let rule = self
            .parser
            .parse(&mut self.registry, expression, &self.table.columns, name)
            .unwrap_or_else(|err| panic!("'{expression}' should parse: {err}"));
        self.rules.push(rule);
        self
    }

    pub fn run(&self) -> (RuleEngine, Vec<ValidationResult>) {
        let mut engine = RuleEngine::new();
        let results = engine
            .validate(&self.table, &self.rules, &self.registry)
            .to_vec();
        (engine, results)
    }
}

/// Builds a table whose rows all share `columns`, in order.
pub fn table(columns: &[&str], rows: Vec<Vec<Value>>) -> Table {
    let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .into_iter()
        .map(|cells| RowData::from_pairs(columns.iter().cloned().zip(cells)))
        .collect();
    Table::with_rows(columns, rows)
}

/// Pass/fail flags of one rule, in row order.
pub fn passed_for(results: &[ValidationResult], rule_name: &str) -> Vec<bool> {
    results
        .iter()
        .filter(|r| r.rule_name == rule_name)
        .map(|r| r.passed)
        .collect()
}

/// Parses and validates a single expression, returning its per-row flags.
pub fn validate_one(columns: &[&str], rows: Vec<Vec<Value>>, expression: &str) -> Vec<bool> {
    let mut bench = Workbench::new(table(columns, rows));
    bench.rule(expression, Some("under_test"));
    let (_, results) = bench.run();
    passed_for(&results, "under_test")
}
