use tracing::debug;

use super::ast::ParsedChoices;
use super::error::ParseError;
use super::split::split;

/// Splits a template into its raw `selector#text` entries.
///
/// Quote characters are removed and a trailing comma is stripped from every
/// entry; empty entries are dropped.
pub fn choice_entries(text: &str) -> Vec<String> {
    split(text, "|")
}

/// Parse a choice template into selectors, texts, and the default text.
///
/// Everything before the first `#` of an entry is its selector and
/// everything after it is the text, so the text may itself contain `#`.
/// An entry with no `#` is accepted: its whole content becomes the selector
/// and its text is empty. Use [`parse_choices_strict`] to reject such
/// entries instead.
///
/// ```
/// use istring::parser::parse_choices;
///
/// let parsed = parse_choices("1#one|2#two|#other");
/// assert_eq!(parsed.selectors(), ["1", "2", ""]);
/// assert_eq!(parsed.texts(), ["one", "two", "other"]);
/// assert_eq!(parsed.default_text(), "other");
/// ```
pub fn parse_choices(text: &str) -> ParsedChoices {
    let mut parsed = ParsedChoices::default();
    for entry in choice_entries(text) {
        match entry.split_once('#') {
            Some((selector, choice_text)) => parsed.push(selector, choice_text),
            None => parsed.push(entry, String::new()),
        }
    }
    debug!(
        choices = parsed.len(),
        has_default = parsed.default_index().is_some(),
        "parsed choice template"
    );
    parsed
}

/// Parse a choice template, failing on the first entry without a `#`.
///
/// # Errors
///
/// Returns [`ParseError::MissingSeparator`] naming the offending entry.
pub fn parse_choices_strict(text: &str) -> Result<ParsedChoices, ParseError> {
    let mut parsed = ParsedChoices::default();
    for (index, entry) in choice_entries(text).into_iter().enumerate() {
        let Some((selector, choice_text)) = entry.split_once('#') else {
            return Err(ParseError::MissingSeparator { index, entry });
        };
        parsed.push(selector, choice_text);
    }
    Ok(parsed)
}
