use model::{ConditionType, Value};

/// Applies one [`ConditionType`] to a cell and its comparison value.
pub(crate) struct ComparisonEvaluator<'a> {
    left: &'a Value,
    right: &'a Value,
    op: ConditionType,
}

impl<'a> ComparisonEvaluator<'a> {
    pub fn new(left: &'a Value, right: &'a Value, op: ConditionType) -> Self {
        Self { left, right, op }
    }

    pub fn evaluate(&self) -> bool {
        match self.op {
            ConditionType::GreaterThan => self.eval_ordering(|l, r| l > r),
            ConditionType::LessThan => self.eval_ordering(|l, r| l < r),
            ConditionType::GreaterEqual => self.eval_ordering(|l, r| l >= r),
            ConditionType::LessEqual => self.eval_ordering(|l, r| l <= r),
            ConditionType::Equal => self.eval_equal(),
            ConditionType::NotEqual => !self.eval_equal(),
            ConditionType::Contains => self.eval_string(|hay, needle| hay.contains(needle)),
            ConditionType::StartsWith => self.eval_string(|hay, needle| hay.starts_with(needle)),
            ConditionType::EndsWith => self.eval_string(|hay, needle| hay.ends_with(needle)),
        }
    }

    /// Both sides must coerce to numbers, otherwise the comparison is false.
    fn eval_ordering(&self, cmp: impl Fn(f64, f64) -> bool) -> bool {
        match (self.left.as_f64(), self.right.as_f64()) {
            (Some(l), Some(r)) => cmp(l, r),
            _ => false,
        }
    }

    /// Numeric equality first; otherwise trimmed, case-insensitive text equality.
    fn eval_equal(&self) -> bool {
        match (self.left.as_f64(), self.right.as_f64()) {
            (Some(l), Some(r)) => l == r,
            _ => {
                let l = self.left.as_string();
                let r = self.right.as_string();
                l.trim().to_uppercase() == r.trim().to_uppercase()
            }
        }
    }

    fn eval_string(&self, cmp: impl Fn(&str, &str) -> bool) -> bool {
        let hay = self.left.as_string().to_lowercase();
        let needle = self.right.as_string().to_lowercase();
        cmp(&hay, &needle)
    }
}
