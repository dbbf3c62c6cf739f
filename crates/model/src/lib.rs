pub mod core;
pub mod error;
pub mod records;
pub mod results;
pub mod rules;

pub use crate::core::value::{FieldValue, Value};
pub use error::ModelError;
pub use records::{row::RowData, table::Table};
pub use results::ValidationResult;
pub use rules::{
    condition::{Condition, RuleReference},
    operand::Operand,
    operator::{ConditionType, LogicalOperator},
    rule::Rule,
    rule_set::RuleSet,
};
