//! Miette diagnostic wrapper for template warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use istring::ChoiceWarning;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the template line a warning
/// came from.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("template warning: {message}")]
#[diagnostic(code(istring::lint), severity(Warning))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("in this template")]
    span: SourceSpan,

    message: String,
}

impl TemplateDiagnostic {
    /// Create a diagnostic covering line `line_index` (zero-based) of
    /// `content`.
    pub fn for_line(path: &Path, content: &str, line_index: usize, warning: &ChoiceWarning) -> Self {
        let offset = content
            .lines()
            .take(line_index)
            .map(|l| l.len() + 1)
            .sum::<usize>()
            .min(content.len());
        let length = content
            .lines()
            .nth(line_index)
            .map_or(0, str::len)
            .min(content.len() - offset);

        TemplateDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            message: warning.to_string(),
        }
    }
}
