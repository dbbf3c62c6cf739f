use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a table: ordered `(column, value)` cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(field_values: Vec<FieldValue>) -> Self {
        RowData { field_values }
    }

    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        RowData {
            field_values: pairs
                .into_iter()
                .map(|(k, v)| FieldValue::new(k, v))
                .collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.field_values
            .iter()
            .find(|f| f.name == field)
            .map(|f| &f.value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.field_values.iter().any(|f| f.name == field)
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field).cloned().unwrap_or(Value::Null)
    }

    pub fn len(&self) -> usize {
        self.field_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_values.is_empty()
    }
}

impl fmt::Display for RowData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.field_values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", field.name, field.value)?;
        }
        write!(f, "}}")
    }
}
