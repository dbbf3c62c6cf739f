use std::collections::HashSet;

/// Makes header names usable as column identifiers.
///
/// Names are trimmed, blank ones become `column_<n>` (1-based position) and
/// repeats get the lowest free numeric suffix: `A, B, A` reads as `A, B, A1`.
pub fn unique_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken = HashSet::new();
    let mut headers = Vec::new();

    for (idx, name) in raw.into_iter().enumerate() {
        let base = match name.trim() {
            "" => placeholder_name(idx),
            trimmed => trimmed.to_string(),
        };

        let unique = if taken.contains(&base) {
            (1..)
                .map(|n| format!("{base}{n}"))
                .find(|candidate| !taken.contains(candidate))
                .unwrap_or_else(|| placeholder_name(idx))
        } else {
            base
        };

        taken.insert(unique.clone());
        headers.push(unique);
    }

    headers
}

pub fn placeholder_name(idx: usize) -> String {
    format!("column_{}", idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_get_suffixes() {
        assert_eq!(unique_headers(["A", "B", "A"]), vec!["A", "B", "A1"]);
        assert_eq!(
            unique_headers(["A", "A", "A1", "A"]),
            vec!["A", "A1", "A11", "A2"]
        );
    }

    #[test]
    fn test_blank_headers_get_positions() {
        assert_eq!(
            unique_headers([" Voltage ", "", "  "]),
            vec!["Voltage", "column_2", "column_3"]
        );
    }
}
