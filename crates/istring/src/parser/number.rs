//! Lenient number parsing for numeric selectors.
//!
//! Both parsers read the longest numeric prefix of their input, after
//! optional leading whitespace, and fall back to `0` instead of failing.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

/// `i64::MAX / 100_000`. Integers with a larger magnitude parse as `0`.
const INTEGER_LIMIT: i64 = 92_233_720_368_547;

/// Parse the floating-point prefix of `text`.
///
/// Returns `0.0` when there is no numeric prefix or the value overflows.
pub fn parse_double(text: &str) -> f64 {
    let mut input = text;
    let Ok(literal) = float_literal(&mut input) else {
        return 0.0;
    };
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse the base-10 integer prefix of `text` as an `f64`.
///
/// Returns `0.0` when there is no integer prefix, when it overflows `i64`,
/// or when its magnitude exceeds `i64::MAX / 100_000`.
pub fn parse_integer_as_double(text: &str) -> f64 {
    let mut input = text;
    let Ok(literal) = integer_literal(&mut input) else {
        return 0.0;
    };
    match literal.parse::<i64>() {
        Ok(value) if (-INTEGER_LIMIT..=INTEGER_LIMIT).contains(&value) => value as f64,
        _ => 0.0,
    }
}

/// Returns true if all of `text` (ignoring leading whitespace) is a number.
pub fn parses_as_number(text: &str) -> bool {
    let mut input = text;
    float_literal(&mut input).is_ok() && input.is_empty()
}

fn float_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    leading_space(input)?;
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

fn integer_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    leading_space(input)?;
    (opt(one_of(['+', '-'])), digit1).take().parse_next(input)
}

fn leading_space(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
