use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Rule expression is empty")]
    EmptyExpression,

    #[error("No valid condition could be extracted from '{expression}'")]
    NoValidConditions { expression: String },
}

impl ParseError {
    pub fn no_valid_conditions(expression: &str) -> Self {
        ParseError::NoValidConditions {
            expression: expression.to_string(),
        }
    }
}
