//! Configuration for choice matching.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Default cap on the compiled size of a single pattern selector.
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Options that affect how selectors are matched.
///
/// # Example
///
/// ```
/// use istring::MatchOptions;
///
/// let options = MatchOptions::builder().fold_pattern_case(true).build();
/// assert!(options.fold_pattern_case);
/// assert_eq!(options.pattern_size_limit, istring::options::DEFAULT_PATTERN_SIZE_LIMIT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Upper bound, in bytes, on a compiled pattern selector. Selectors that
    /// exceed it are skipped like any other invalid pattern.
    #[builder(default = DEFAULT_PATTERN_SIZE_LIMIT)]
    pub pattern_size_limit: usize,

    /// Lowercase pattern selectors before compiling them so they are matched
    /// in the same case as the lowercased reference.
    #[builder(default)]
    pub fold_pattern_case: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions::builder().build()
    }
}
