use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every row of a CSV file against a set of rules
    Validate {
        #[arg(long, help = "CSV file holding the rows to validate")]
        data: String,

        #[arg(long, help = "Text file with one rule expression per line")]
        rules: Option<String>,

        #[arg(long, help = "Previously saved JSON rule set to start from")]
        rule_set: Option<String>,

        #[arg(long, default_value_t = 0, help = "0-based row holding the column names")]
        header_row: usize,

        #[arg(long, default_value_t = ',', help = "Field delimiter")]
        delimiter: char,

        #[arg(long, help = "Also write the report to this file")]
        output: Option<String>,

        #[arg(long, help = "Emit the JSON summary instead of the text report")]
        json: bool,

        #[arg(long, help = "Save the resulting rule set to this JSON file")]
        save_rule_set: Option<String>,
    },
    /// Parse one expression and print the resulting rule as JSON
    Parse {
        #[arg(long, value_delimiter = ',', help = "Comma-separated column names")]
        columns: Vec<String>,

        #[arg(long, help = "Rule name; derived from the expression if omitted")]
        name: Option<String>,

        expression: String,
    },
    /// List the rules of a saved rule set
    Rules {
        #[arg(long, help = "JSON rule set file")]
        rule_set: String,
    },
}
