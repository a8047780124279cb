//! Numeric selector grammar and matching.
//!
//! Selector forms, checked in this order:
//! - `<=N`, `>=N`, `<N`, `>N`: comparison against a floating-point bound
//! - `A-B`: inclusive integer range, split on the first `-`
//! - a boolean keyword: tolerance-equal to `1` or `0`
//! - anything else: tolerance-equal to the selector's integer value

use crate::matcher::boolean::classify_boolean;
use crate::parser::{ParsedChoices, parse_double, parse_integer_as_double};

/// A comparison operator prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    AtMost,
    AtLeast,
    LessThan,
    GreaterThan,
}

impl Comparison {
    /// Splits a selector into its comparison operator and bound text.
    ///
    /// An operator only counts when at least one character follows it, so
    /// `"<="` on its own is `<` followed by `"="`.
    pub fn split(selector: &str) -> Option<(Comparison, &str)> {
        let operators = [
            ("<=", Comparison::AtMost),
            (">=", Comparison::AtLeast),
            ("<", Comparison::LessThan),
            (">", Comparison::GreaterThan),
        ];
        operators.into_iter().find_map(|(prefix, comparison)| {
            selector
                .strip_prefix(prefix)
                .filter(|bound| !bound.is_empty())
                .map(|bound| (comparison, bound))
        })
    }

    fn holds(self, reference: f64, bound: f64) -> bool {
        match self {
            Comparison::AtMost => reference <= bound,
            Comparison::AtLeast => reference >= bound,
            Comparison::LessThan => reference < bound,
            Comparison::GreaterThan => reference > bound,
        }
    }
}

/// A selector interpreted against a numeric reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericSelector {
    /// Empty selector; only supplies the default text.
    Default,
    Compare(Comparison, f64),
    Range { start: f64, end: f64 },
    Boolean(bool),
    Exact(f64),
}

impl NumericSelector {
    /// Interpret a selector. Unparsable numbers become `0`.
    pub fn parse(selector: &str) -> NumericSelector {
        if selector.is_empty() {
            return NumericSelector::Default;
        }
        if let Some((comparison, bound)) = Comparison::split(selector) {
            return NumericSelector::Compare(comparison, parse_double(bound));
        }
        if let Some((start, end)) = selector.split_once('-') {
            return NumericSelector::Range {
                start: parse_integer_as_double(start),
                end: parse_integer_as_double(end),
            };
        }
        match classify_boolean(selector) {
            Some(value) => NumericSelector::Boolean(value),
            None => NumericSelector::Exact(parse_integer_as_double(selector)),
        }
    }

    pub fn matches(self, reference: f64) -> bool {
        match self {
            NumericSelector::Default => false,
            NumericSelector::Compare(comparison, bound) => comparison.holds(reference, bound),
            NumericSelector::Range { start, end } => reference >= start && reference <= end,
            NumericSelector::Boolean(value) => {
                tolerance_equal(reference, if value { 1.0 } else { 0.0 })
            }
            NumericSelector::Exact(value) => tolerance_equal(reference, value),
        }
    }
}

/// Relative floating-point equality: `|a - b| * 1e12 <= min(|a|, |b|)`.
///
/// When either side is exactly zero only an exact zero passes.
///
/// ```
/// use istring::matcher::tolerance_equal;
///
/// assert!(tolerance_equal(1.0000000000001, 1.0));
/// assert!(!tolerance_equal(0.0, 0.0000001));
/// ```
pub fn tolerance_equal(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}

/// Select the text of the first selector that matches `reference`.
pub fn select_numeric(choices: &ParsedChoices, reference: f64) -> &str {
    choices
        .iter()
        .find(|(selector, _)| NumericSelector::parse(selector).matches(reference))
        .map_or(choices.default_text(), |(_, text)| text)
}
