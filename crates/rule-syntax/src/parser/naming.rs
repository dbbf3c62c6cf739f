/// Longest derived rule name, in characters, before words are joined.
pub const MAX_DERIVED_NAME_LEN: usize = 30;

/// Derives a rule name from its expression: punctuation is dropped, the text
/// is cut to [`MAX_DERIVED_NAME_LEN`] characters and the remaining words are
/// joined with underscores. Returns `None` when nothing is left.
pub fn derive_rule_name(expression: &str) -> Option<String> {
    let cleaned: String = expression
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .take(MAX_DERIVED_NAME_LEN)
        .collect();

    let name = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    if name.is_empty() { None } else { Some(name) }
}
