use connectors::FileError;
use rule_syntax::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    File(#[from] FileError),

    #[error("Failed to parse rule: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("No rules given; pass --rules and/or --rule-set")]
    NoRules,
}
