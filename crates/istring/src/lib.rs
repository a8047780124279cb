//! Locale-shareable message strings.
//!
//! A message is either plain text with `{key}` placeholders, or a choice
//! template such as `"0#No files|1#One file|#{count} files"` whose entries
//! are selected by a boolean, string, or numeric reference.

pub mod formatter;
pub mod lint;
pub mod matcher;
mod message;
pub mod options;
pub mod parser;
pub mod types;

use std::collections::BTreeMap;

pub use lint::{ChoiceWarning, lint_choices};
pub use message::Message;
pub use options::MatchOptions;
pub use parser::{ParseError, ParsedChoices, parse_choices, parse_choices_strict};
pub use types::{Reference, ToStringMap};

/// `i64::MAX / 10_000`. Counts with a larger magnitude are resolved as `1`.
pub const COUNT_LIMIT: i64 = 922_337_203_685_477;

/// Substitutes `{key}` placeholders in `message`.
///
/// ```
/// use istring::values;
///
/// assert_eq!(istring::format("Hi {name}", &values! { "name" => "Bo" }), "Hi Bo");
/// ```
pub fn format<M: ToStringMap + ?Sized>(message: &str, values: &M) -> String {
    Message::new(message).format(values)
}

/// Resolves `message` as a choice against `reference`, then substitutes
/// `values` into the selected text.
pub fn format_choice<M: ToStringMap + ?Sized>(
    message: &str,
    reference: impl Into<Reference>,
    values: &M,
) -> String {
    Message::new(message).format_choice(reference, values)
}

/// Resolves `message` as a choice against `reference` with no substitution.
pub fn choose(message: &str, reference: impl Into<Reference>) -> String {
    format_choice(message, reference, &BTreeMap::<String, String>::new())
}

/// Resolves `message` as a numeric choice against an integer count.
///
/// See [`count_reference`] for how the count is converted.
///
/// ```
/// use istring::values;
///
/// let template = "1#one item|#{n} items";
/// assert_eq!(istring::format_choice_count(template, 4, &values! { "n" => 4 }), "4 items");
/// assert_eq!(istring::format_choice_count(template, i64::MAX, &values! {}), "one item");
/// ```
pub fn format_choice_count<M: ToStringMap + ?Sized>(message: &str, count: i64, values: &M) -> String {
    format_choice(message, count_reference(count), values)
}

/// Converts an integer count to a numeric reference.
///
/// Counts too large to be resolved reliably as floating-point values are
/// treated as `1`.
pub fn count_reference(count: i64) -> Reference {
    if (-COUNT_LIMIT..=COUNT_LIMIT).contains(&count) {
        Reference::Number(count as f64)
    } else {
        Reference::Number(1.0)
    }
}

/// Creates a `BTreeMap<String, String>` of placeholder values.
///
/// Values are converted with `ToString`, so numbers and other displayable
/// values can be passed directly.
///
/// # Example
///
/// ```
/// use istring::values;
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"], "3");
/// assert_eq!(v["name"], "Alice");
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::BTreeMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::BTreeMap::<String, String>::new();
            $(
                map.insert(::std::string::ToString::to_string(&$key), ::std::string::ToString::to_string(&$value));
            )+
            map
        }
    };
}
