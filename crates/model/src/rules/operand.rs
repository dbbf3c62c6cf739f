use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Right-hand side of a condition, resolved once when the expression is parsed.
///
/// Resolution order is fixed: quoted text is a [`Operand::Literal`], an exact
/// column name is a [`Operand::Column`], then integers, floats and finally bare
/// words ([`Operand::Text`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operand {
    /// Quoted text; never reinterpreted as a column name.
    Literal(String),
    /// Another column of the same row.
    Column(String),
    Int(i64),
    Float(f64),
    /// Unquoted word that did not name a known column.
    Text(String),
}

impl Operand {
    /// The operand as a cell value, for operands that do not depend on the row.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Operand::Literal(s) | Operand::Text(s) => Some(Value::String(s.clone())),
            Operand::Int(i) => Some(Value::Int(*i)),
            Operand::Float(f) => Some(Value::Float(*f)),
            Operand::Column(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Operand::Literal(_))
    }

    pub fn column_name(&self) -> Option<&str> {
        match self {
            Operand::Column(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(s) => write!(f, "\"{s}\""),
            Operand::Column(name) => write!(f, "{name}"),
            Operand::Int(i) => write!(f, "{i}"),
            Operand::Float(v) => write!(f, "{v}"),
            Operand::Text(s) => write!(f, "{s}"),
        }
    }
}
