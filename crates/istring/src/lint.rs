//! Advisory checks for choice templates.
//!
//! Resolution never fails on a malformed template; it quietly degrades to the
//! default text. These checks surface the entries that cause that, without
//! changing how anything resolves.

use serde::Serialize;
use strsim::damerau_levenshtein;
use thiserror::Error;

use crate::matcher::boolean::{FALSE_KEYWORDS, TRUE_KEYWORDS};
use crate::matcher::{Comparison, classify_boolean, compile_selector};
use crate::options::MatchOptions;
use crate::parser::{choice_entries, parses_as_number};

/// A warning about a single choice entry. `index` is the entry's position in
/// the template.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceWarning {
    #[error("choice {index} has no '#' separator, so its text is empty: '{entry}'")]
    MissingSeparator { index: usize, entry: String },

    #[error("choice {index} replaces the default text from choice {previous}")]
    ShadowedDefault { index: usize, previous: usize },

    #[error("choice {index} selector '{selector}' is not a valid pattern: {message}")]
    InvalidPattern {
        index: usize,
        selector: String,
        message: String,
    },

    #[error(
        "choice {index} selector '{selector}' has upper-case letters and never matches a text reference"
    )]
    UppercasePattern { index: usize, selector: String },

    #[error("choice {index} selector '{selector}' has a non-numeric bound, which compares as 0")]
    UnparsableBound { index: usize, selector: String },

    #[error("choice {index} selector '{selector}' is not a keyword; did you mean '{suggestion}'?")]
    NearBooleanKeyword {
        index: usize,
        selector: String,
        suggestion: String,
    },
}

/// Checks every entry of a choice template.
///
/// ```
/// use istring::MatchOptions;
/// use istring::lint::{ChoiceWarning, lint_choices};
///
/// let warnings = lint_choices("one#a|#b|#c", &MatchOptions::default());
/// assert_eq!(warnings, vec![ChoiceWarning::ShadowedDefault { index: 2, previous: 1 }]);
/// ```
pub fn lint_choices(text: &str, options: &MatchOptions) -> Vec<ChoiceWarning> {
    let mut warnings = Vec::new();
    let mut default_index: Option<usize> = None;
    for (index, entry) in choice_entries(text).into_iter().enumerate() {
        let Some((selector, _)) = entry.split_once('#') else {
            warnings.push(ChoiceWarning::MissingSeparator { index, entry });
            continue;
        };
        if selector.is_empty() {
            if let Some(previous) = default_index.replace(index) {
                warnings.push(ChoiceWarning::ShadowedDefault { index, previous });
            }
            continue;
        }
        lint_selector(index, selector, options, &mut warnings);
    }
    warnings
}

fn lint_selector(
    index: usize,
    selector: &str,
    options: &MatchOptions,
    warnings: &mut Vec<ChoiceWarning>,
) {
    if let Err(error) = compile_selector(selector, options) {
        warnings.push(ChoiceWarning::InvalidPattern {
            index,
            selector: selector.to_string(),
            message: error.to_string(),
        });
    } else if !options.fold_pattern_case
        && classify_boolean(selector).is_none()
        && has_uppercase_literal(selector)
    {
        warnings.push(ChoiceWarning::UppercasePattern {
            index,
            selector: selector.to_string(),
        });
    }

    if Comparison::split(selector).is_some_and(|(_, bound)| !parses_as_number(bound)) {
        warnings.push(ChoiceWarning::UnparsableBound {
            index,
            selector: selector.to_string(),
        });
    }

    if let Some(suggestion) = near_boolean_keyword(selector) {
        warnings.push(ChoiceWarning::NearBooleanKeyword {
            index,
            selector: selector.to_string(),
            suggestion: suggestion.to_string(),
        });
    }
}

/// Upper-case ASCII letters outside escapes like `\D`, ignoring patterns that
/// turn on case-insensitive matching themselves.
fn has_uppercase_literal(selector: &str) -> bool {
    if selector.contains("(?i") {
        return false;
    }
    let mut escaped = false;
    for c in selector.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c.is_ascii_uppercase() {
            return true;
        }
    }
    false
}

/// A keyword one substitution or transposition away from `selector`.
fn near_boolean_keyword(selector: &str) -> Option<&'static str> {
    if selector.len() < 3
        || !selector.chars().all(|c| c.is_ascii_alphabetic())
        || classify_boolean(selector).is_some()
    {
        return None;
    }
    let lowered = selector.to_ascii_lowercase();
    TRUE_KEYWORDS
        .into_iter()
        .chain(FALSE_KEYWORDS)
        .find(|keyword| keyword.len() == lowered.len() && damerau_levenshtein(&lowered, keyword) == 1)
}
