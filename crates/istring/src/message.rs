//! The message facade: a template string plus its lazily parsed choices.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::OnceLock;

use crate::formatter::format_tokens;
use crate::lint::{ChoiceWarning, lint_choices};
use crate::matcher::{PatternSet, select_boolean, select_numeric, select_text};
use crate::options::MatchOptions;
use crate::parser::{ParsedChoices, parse_choices};
use crate::types::{Reference, ToStringMap};

/// A message template that can be formatted with `{key}` values or resolved
/// as a choice against a [`Reference`].
///
/// The template text never changes. Its choices are parsed on the first
/// choice resolution and cached; pattern selectors are compiled on the
/// first string resolution. Both caches are written once and are safe to
/// populate from several threads.
///
/// # Example
///
/// ```
/// use istring::{Message, values};
///
/// let message = Message::new("0#No files|1#One file|#{count} files");
/// assert_eq!(message.format_choice(1, &values! {}), "One file");
/// assert_eq!(
///     message.format_choice(7, &values! { "count" => 7 }),
///     "7 files"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Message {
    text: String,
    options: MatchOptions,
    choices: OnceLock<ParsedChoices>,
    patterns: OnceLock<PatternSet>,
}

impl Message {
    /// Creates a message with default [`MatchOptions`].
    pub fn new(text: impl Into<String>) -> Message {
        Message::with_options(text, MatchOptions::default())
    }

    pub fn with_options(text: impl Into<String>, options: MatchOptions) -> Message {
        Message {
            text: text.into(),
            options,
            choices: OnceLock::new(),
            patterns: OnceLock::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Length of the template in bytes, clamped to `i32::MAX`.
    pub fn length(&self) -> i32 {
        clamp_length(self.text.len())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Substitutes `{key}` placeholders in the template text.
    pub fn format<M: ToStringMap + ?Sized>(&self, values: &M) -> String {
        format_tokens(&self.text, &values.to_string_map())
    }

    /// Returns the parsed choices, parsing the template on first use.
    pub fn choices(&self) -> &ParsedChoices {
        self.choices.get_or_init(|| parse_choices(&self.text))
    }

    /// Discards the cached parse and parses the template again.
    pub fn reparse(&mut self) -> &ParsedChoices {
        self.choices = OnceLock::new();
        self.patterns = OnceLock::new();
        self.choices()
    }

    fn patterns(&self) -> &PatternSet {
        self.patterns
            .get_or_init(|| PatternSet::compile(self.choices(), &self.options))
    }

    /// Resolves the template as a choice against `reference`.
    ///
    /// Returns `None` for an empty template. Otherwise returns the selected
    /// text, or the default text when nothing matches, as a new message with
    /// the same options.
    pub fn choice(&self, reference: impl Into<Reference>) -> Option<Message> {
        if self.text.is_empty() {
            return None;
        }
        let choices = self.choices();
        let text = match reference.into() {
            Reference::Boolean(value) => select_boolean(choices, value),
            Reference::Text(value) => select_text(choices, self.patterns(), &value),
            Reference::Number(value) => select_numeric(choices, value),
        };
        Some(Message::with_options(text, self.options.clone()))
    }

    /// Resolves a choice and substitutes `values` into it.
    ///
    /// Returns an empty string for an empty template.
    pub fn format_choice<M: ToStringMap + ?Sized>(
        &self,
        reference: impl Into<Reference>,
        values: &M,
    ) -> String {
        let Some(chosen) = self.choice(reference) else {
            return String::new();
        };
        let values = values.to_string_map();
        if values.is_empty() {
            chosen.text
        } else {
            format_tokens(&chosen.text, &values)
        }
    }

    /// Reports suspicious choice entries without affecting resolution.
    pub fn lint(&self) -> Vec<ChoiceWarning> {
        lint_choices(&self.text, &self.options)
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.options == other.options
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::new(text)
    }
}

fn clamp_length(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
