//! Parse error types for choice templates.

use thiserror::Error;

/// An error reported by strict choice parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A choice entry has no `#` between its selector and its text.
    #[error("choice {index} has no '#' separator: '{entry}'")]
    MissingSeparator { index: usize, entry: String },
}
