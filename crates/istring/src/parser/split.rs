//! Literal substring splitting used by the choice parser.

/// Splits `source` on every literal occurrence of `delimiter`.
///
/// Each non-empty segment has its `"` characters removed and one trailing
/// `,` stripped. Segments that end up empty are dropped. An empty
/// delimiter returns `source` as the only segment.
///
/// ```
/// use istring::parser::split;
///
/// assert_eq!(split("\"a\",|b||c", "|"), vec!["a", "b", "c"]);
/// assert_eq!(split("abc", ""), vec!["abc"]);
/// ```
pub fn split(source: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![source.to_string()];
    }
    source
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(clean_segment)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Splits `source` on a single character without any cleanup.
///
/// Empty segments between consecutive delimiters are kept, but a delimiter at
/// the very end does not produce a trailing empty segment, the same way a
/// line reader treats a final newline.
///
/// ```
/// use istring::parser::split_by_symbol;
///
/// assert_eq!(split_by_symbol("a##b", '#'), vec!["a", "", "b"]);
/// assert_eq!(split_by_symbol("a#", '#'), vec!["a"]);
/// ```
pub fn split_by_symbol(source: &str, delimiter: char) -> Vec<String> {
    let mut parts: Vec<String> = source.split(delimiter).map(str::to_string).collect();
    if source.is_empty() || source.ends_with(delimiter) {
        parts.pop();
    }
    parts
}

fn clean_segment(segment: &str) -> String {
    let unquoted: String = segment.chars().filter(|&c| c != '"').collect();
    match unquoted.strip_suffix(',') {
        Some(stripped) => stripped.to_string(),
        None => unquoted,
    }
}
