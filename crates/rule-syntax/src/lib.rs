pub mod error;
pub mod lexer;
pub mod parser;
pub mod registry;

pub use error::ParseError;
pub use parser::{ParsedLine, RuleParser};
pub use registry::RuleRegistry;

use model::Rule;

/// Parses `expression` with a throwaway parser and registers the result.
pub fn parse(
    registry: &mut RuleRegistry,
    expression: &str,
    columns: &[String],
    rule_name: Option<&str>,
) -> Result<Rule, ParseError> {
    RuleParser::new().parse(registry, expression, columns, rule_name)
}
