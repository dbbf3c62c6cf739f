use compare::ComparisonEvaluator;
use model::{Condition, Operand, RowData, Value};
use tracing::trace;

pub mod combine;
mod compare;
pub mod context;

pub use combine::combine;
pub use context::{RuleContext, RuleLookup};

/// Trait for evaluating parsed rule parts against one row.
pub trait Evaluator {
    fn evaluate(&self, row: &RowData) -> bool;
}

impl Evaluator for Condition {
    fn evaluate(&self, row: &RowData) -> bool {
        let Some(cell) = row.get(&self.column) else {
            trace!("Column '{}' missing from row", self.column);
            return false;
        };

        let Some(expected) = resolve_operand(&self.value, row) else {
            return false;
        };

        ComparisonEvaluator::new(cell, &expected, self.operator).evaluate()
    }
}

/// Turns a condition's right-hand side into the value it is compared with.
///
/// A bare word that happens to name a column of this row reads that cell;
/// quoted text never does. A column operand absent from the row yields `None`.
pub fn resolve_operand(operand: &Operand, row: &RowData) -> Option<Value> {
    match operand {
        Operand::Column(name) => row.get(name).cloned(),
        Operand::Text(word) => Some(
            row.get(word)
                .cloned()
                .unwrap_or_else(|| Value::String(word.clone())),
        ),
        other => other.as_value(),
    }
}
