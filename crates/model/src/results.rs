use crate::records::row::RowData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of applying one rule to one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub row_index: usize,
    pub rule_name: String,
    pub passed: bool,
    pub message: String,
    /// Full copy of the row, kept for failure diagnostics.
    pub row_data: RowData,
}

impl ValidationResult {
    pub fn pass(row_index: usize, rule_name: &str, action: &str, row: &RowData) -> Self {
        ValidationResult {
            row_index,
            rule_name: rule_name.to_string(),
            passed: true,
            message: format!("Row {row_index}: {action}"),
            row_data: row.clone(),
        }
    }

    pub fn fail(row_index: usize, rule_name: &str, row: &RowData) -> Self {
        ValidationResult {
            row_index,
            rule_name: rule_name.to_string(),
            passed: false,
            message: format!("Row {row_index}: Rule '{rule_name}' not satisfied"),
            row_data: row.clone(),
        }
    }

    /// A failed result for a rule that could not be evaluated at all.
    pub fn error(row_index: usize, rule_name: &str, reason: impl fmt::Display, row: &RowData) -> Self {
        ValidationResult {
            row_index,
            rule_name: rule_name.to_string(),
            passed: false,
            message: format!("Row {row_index}: Rule '{rule_name}' not evaluated: {reason}"),
            row_data: row.clone(),
        }
    }
}
