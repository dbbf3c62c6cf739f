use model::LogicalOperator;

/// Folds results strictly left to right, with no precedence between `and`
/// and `or`. `ops[i]` joins the running value with `results[i + 1]`.
///
/// An empty slice is `false`. Missing operators end the fold early and extra
/// ones are ignored.
pub fn combine(results: &[bool], ops: &[LogicalOperator]) -> bool {
    let Some((&first, rest)) = results.split_first() else {
        return false;
    };

    rest.iter()
        .zip(ops)
        .fold(first, |acc, (&next, op)| op.apply(acc, next))
}
