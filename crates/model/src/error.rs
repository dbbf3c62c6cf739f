use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown condition type: {0}")]
    UnknownConditionType(String),

    #[error("Unknown logical operator: {0}")]
    UnknownLogicalOperator(String),

    #[error("Failed to decode rule set: {0}")]
    Decode(#[from] serde_json::Error),
}
