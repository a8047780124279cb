use crate::parser::ParsedChoices;

/// Keywords that select the `true` branch.
pub const TRUE_KEYWORDS: [&str; 4] = ["true", "yes", "on", "1"];

/// Keywords that select the `false` branch.
pub const FALSE_KEYWORDS: [&str; 4] = ["false", "no", "off", "0"];

/// ASCII case-insensitive equality.
pub fn equals_ignore_case(source: &str, target: &str) -> bool {
    source.len() == target.len() && source.eq_ignore_ascii_case(target)
}

/// Classifies a selector as a boolean keyword.
///
/// Returns `Some(true)` for `true`/`yes`/`on`/`1`, `Some(false)` for
/// `false`/`no`/`off`/`0` (case-insensitive), and `None` for anything else.
///
/// ```
/// use istring::matcher::classify_boolean;
///
/// assert_eq!(classify_boolean("Yes"), Some(true));
/// assert_eq!(classify_boolean("OFF"), Some(false));
/// assert_eq!(classify_boolean("maybe"), None);
/// ```
pub fn classify_boolean(token: &str) -> Option<bool> {
    if TRUE_KEYWORDS.iter().any(|k| equals_ignore_case(token, k)) {
        Some(true)
    } else if FALSE_KEYWORDS.iter().any(|k| equals_ignore_case(token, k)) {
        Some(false)
    } else {
        None
    }
}

/// Select the text of the first selector whose keyword matches `reference`.
///
/// Selectors that are not boolean keywords never match.
pub fn select_boolean(choices: &ParsedChoices, reference: bool) -> &str {
    choices
        .iter()
        .find(|(selector, _)| classify_boolean(selector) == Some(reference))
        .map_or(choices.default_text(), |(_, text)| text)
}
