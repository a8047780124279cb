//! Parsed representation of a choice template.

use serde::Serialize;

/// The result of parsing a choice template.
///
/// `selectors` and `texts` always have the same length, and `selectors[i]`
/// governs `texts[i]`. The default text comes from the last entry whose
/// selector is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedChoices {
    selectors: Vec<String>,
    texts: Vec<String>,
    default_text: String,
    default_index: Option<usize>,
}

impl ParsedChoices {
    /// Appends a choice. An empty selector replaces the current default.
    pub fn push(&mut self, selector: impl Into<String>, text: impl Into<String>) {
        let selector = selector.into();
        let text = text.into();
        if selector.is_empty() {
            self.default_text.clone_from(&text);
            self.default_index = Some(self.selectors.len());
        }
        self.selectors.push(selector);
        self.texts.push(text);
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Text used when no selector matches; empty when the template has no
    /// empty-selector entry.
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Index of the entry that supplied the default text, if any.
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Iterates `(selector, text)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selectors
            .iter()
            .zip(&self.texts)
            .map(|(selector, text)| (selector.as_str(), text.as_str()))
    }
}
