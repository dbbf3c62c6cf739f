use thiserror::Error;

/// Configuration errors detected before any row is evaluated.
///
/// Row-level problems (missing cells, values that do not coerce) are not
/// errors; they make the affected condition `false`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Rule '{rule}' references undefined rule '{reference}'")]
    UnresolvedReference { rule: String, reference: String },

    #[error("Circular rule reference: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },
}

pub type Result<T> = std::result::Result<T, EngineError>;
