//! Pattern selectors for string references.
//!
//! The reference is lowercased before matching, but selectors are compiled
//! as written unless [`MatchOptions::fold_pattern_case`] is set, so a
//! selector with upper-case literals never matches. A match only counts when
//! the first match found spans the whole reference.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::options::MatchOptions;
use crate::parser::ParsedChoices;

/// Compiled patterns for the non-empty selectors of a template.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    /// Index of the choice this pattern was compiled from.
    index: usize,
    regex: Regex,
}

impl PatternSet {
    /// Compile every non-empty selector in source order.
    ///
    /// Selectors that fail to compile are skipped and logged.
    pub fn compile(choices: &ParsedChoices, options: &MatchOptions) -> PatternSet {
        let patterns: Vec<CompiledPattern> = choices
            .selectors()
            .iter()
            .enumerate()
            .filter(|(_, selector)| !selector.is_empty())
            .filter_map(|(index, selector)| match compile_selector(selector, options) {
                Ok(regex) => Some(CompiledPattern { index, regex }),
                Err(error) => {
                    warn!(index, %selector, %error, "skipping selector that is not a valid pattern");
                    None
                }
            })
            .collect();
        debug!(patterns = patterns.len(), "compiled choice patterns");
        PatternSet { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the choice index of the first pattern whose first match is the
    /// entire `reference`.
    pub fn find_whole_match(&self, reference: &str) -> Option<usize> {
        self.patterns
            .iter()
            .find(|pattern| {
                pattern
                    .regex
                    .find(reference)
                    .is_some_and(|found| found.as_str() == reference)
            })
            .map(|pattern| pattern.index)
    }
}

/// Compile a single selector with the configured size limit.
///
/// # Errors
///
/// Returns the pattern engine's error if the selector is not a valid pattern
/// or its compiled form exceeds `options.pattern_size_limit`.
pub fn compile_selector(selector: &str, options: &MatchOptions) -> Result<Regex, regex::Error> {
    let source = if options.fold_pattern_case {
        selector.to_ascii_lowercase()
    } else {
        selector.to_string()
    };
    RegexBuilder::new(&source)
        .size_limit(options.pattern_size_limit)
        .build()
}

/// Select the text of the first pattern that matches all of `reference`.
pub fn select_text<'a>(choices: &'a ParsedChoices, patterns: &PatternSet, reference: &str) -> &'a str {
    let reference = reference.to_ascii_lowercase();
    patterns
        .find_whole_match(&reference)
        .and_then(|index| choices.texts().get(index))
        .map_or(choices.default_text(), String::as_str)
}
