//! Tests for choices resolved against string references with pattern
//! selectors.

use istring::{MatchOptions, Message, choose};

// =============================================================================
// Whole-string matching
// =============================================================================

#[test]
fn pattern_exact_literal_matches() {
    assert_eq!(choose("abc#found|#other", "abc"), "found");
}

#[test]
fn pattern_partial_match_is_rejected() {
    assert_eq!(choose("abc#found|#other", "xabcx"), "other");
    assert_eq!(choose("abc#found|#other", "abcd"), "other");
}

#[test]
fn pattern_first_match_must_span_reference() {
    // The leftmost match of "a.*" in "banana" is "anana", which is not the
    // whole reference.
    assert_eq!(choose("a.*#starts with a|#other", "apple"), "starts with a");
    assert_eq!(choose("a.*#starts with a|#other", "banana"), "other");
}

#[test]
fn pattern_character_classes() {
    let template = "[0-9]+#digits|[a-z]+#letters|#mixed";
    assert_eq!(choose(template, "123"), "digits");
    assert_eq!(choose(template, "abc"), "letters");
    assert_eq!(choose(template, "12a"), "mixed");
}

#[test]
fn pattern_first_matching_selector_wins() {
    assert_eq!(choose("m.*#first|ma.*#second", "male"), "first");
}

#[test]
fn pattern_plural_like_categories() {
    let template = "one#{n} file|few#{n} files (few)|#{n} files";
    assert_eq!(choose(template, "one"), "{n} file");
    assert_eq!(choose(template, "few"), "{n} files (few)");
    assert_eq!(choose(template, "many"), "{n} files");
}

// =============================================================================
// Case handling
// =============================================================================

#[test]
fn pattern_reference_is_lowercased() {
    assert_eq!(choose("abc#found|#other", "ABC"), "found");
    assert_eq!(choose("true#T|#F", "TRUE"), "T");
}

#[test]
fn pattern_uppercase_selector_never_matches() {
    assert_eq!(choose("Abc#found|#other", "Abc"), "other");
    assert_eq!(choose("Abc#found|#other", "abc"), "other");
}

#[test]
fn pattern_inline_case_flag_matches() {
    assert_eq!(choose("(?i)Abc#found|#other", "aBc"), "found");
}

#[test]
fn pattern_fold_case_option_lowercases_selectors() {
    let options = MatchOptions::builder().fold_pattern_case(true).build();
    let message = Message::with_options("Abc#found|#other", options);
    assert_eq!(message.choice("ABC").unwrap().as_str(), "found");
}

// =============================================================================
// Defaults and skipped selectors
// =============================================================================

#[test]
fn pattern_default_before_selectors() {
    assert_eq!(choose("#def|a#A|b#B", "b"), "B");
    assert_eq!(choose("#def|a#A|b#B", "c"), "def");
}

#[test]
fn pattern_invalid_selector_is_skipped() {
    assert_eq!(choose("(#broken|b#B|#def", "b"), "B");
    assert_eq!(choose("(#broken|b#B|#def", "("), "def");
}

#[test]
fn pattern_empty_reference() {
    assert_eq!(choose("x#X|#def", ""), "def");
    assert_eq!(choose("x*#empty ok|#def", ""), "empty ok");
}

#[test]
fn pattern_no_match_without_default_is_empty() {
    assert_eq!(choose("a#A", "b"), "");
}

#[test]
fn pattern_over_size_limit_is_skipped() {
    let template = "[a-z]{1,500}#word|#other";
    assert_eq!(choose(template, "hello"), "word");

    let options = MatchOptions::builder().pattern_size_limit(1000).build();
    let message = Message::with_options(template, options);
    assert_eq!(message.choice("hello").unwrap().as_str(), "other");
}
