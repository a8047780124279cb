//! Choice-grammar parser.
//!
//! A choice template is a `|`-separated list of `selector#text` entries. The
//! parser only splits the template into index-aligned selectors and texts;
//! selectors are interpreted later by the matcher for the reference type in
//! use.

pub mod ast;
mod choices;
pub mod error;
mod number;
mod split;

pub use ast::ParsedChoices;
pub use choices::{choice_entries, parse_choices, parse_choices_strict};
pub use error::ParseError;
pub use number::{parse_double, parse_integer_as_double, parses_as_number};
pub use split::{split, split_by_symbol};
