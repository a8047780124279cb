//! Token substitution for `{key}` placeholders.

use std::collections::BTreeMap;

/// Replaces the first `{key}` placeholder for each entry of `values`.
///
/// Entries are applied in key order. Only the first occurrence of each
/// placeholder is replaced; placeholders without a value are left as they
/// are.
///
/// ```
/// use istring::formatter::format_tokens;
/// use istring::values;
///
/// let values = values! { "a" => "X" };
/// assert_eq!(format_tokens("{a} and {a}", &values), "X and {a}");
/// assert_eq!(format_tokens("{b}", &values), "{b}");
/// ```
pub fn format_tokens(text: &str, values: &BTreeMap<String, String>) -> String {
    let mut formatted = text.to_string();
    for (key, value) in values {
        let token = format!("{{{key}}}");
        if let Some(start) = formatted.find(&token) {
            formatted.replace_range(start..start + token.len(), value);
        }
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_empty_values_is_identity() {
        assert_eq!(format_tokens("Hello {name}", &map(&[])), "Hello {name}");
    }

    #[test]
    fn test_multiple_keys() {
        let values = map(&[("count", "3"), ("name", "Ann")]);
        assert_eq!(
            format_tokens("{name} has {count} files", &values),
            "Ann has 3 files"
        );
    }

    #[test]
    fn test_values_applied_in_key_order() {
        // "a" runs first and inserts a "{b}" placeholder that "b" then fills.
        let values = map(&[("a", "{b}"), ("b", "done")]);
        assert_eq!(format_tokens("{a} {b}", &values), "done {b}");
    }

    #[test]
    fn test_non_ascii_text() {
        let values = map(&[("n", "5")]);
        assert_eq!(format_tokens("für {n} Äpfel", &values), "für 5 Äpfel");
    }
}
