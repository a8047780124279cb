//! Selector matching, one algorithm per reference type.
//!
//! Each matcher scans the parsed selectors in source order, returns the text
//! of the first selector that matches, and falls back to the default text
//! otherwise. Empty selectors only ever supply the default.

pub mod boolean;
pub mod numeric;
pub mod pattern;

pub use boolean::{classify_boolean, equals_ignore_case, select_boolean};
pub use numeric::{Comparison, NumericSelector, select_numeric, tolerance_equal};
pub use pattern::{PatternSet, compile_selector, select_text};
