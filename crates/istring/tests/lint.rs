//! Tests for the advisory template checks.

use istring::{ChoiceWarning, MatchOptions, Message, lint_choices};
use serde_json::json;

fn lint(text: &str) -> Vec<ChoiceWarning> {
    lint_choices(text, &MatchOptions::default())
}

// =============================================================================
// Clean templates
// =============================================================================

#[test]
fn lint_empty_template_has_no_warnings() {
    assert!(lint("").is_empty());
}

#[test]
fn lint_well_formed_template_has_no_warnings() {
    let template = "1#one|<=5#few|10-20#many|true#yes|(?i)Abc#x|\\D+#nondigits|#other";
    assert!(lint(template).is_empty(), "{:?}", lint(template));
}

#[test]
fn lint_plural_category_names_are_not_keyword_typos() {
    assert!(lint("zero#a|one#b|two#c|few#d|many#e|other#f").is_empty());
}

// =============================================================================
// Structural warnings
// =============================================================================

#[test]
fn lint_missing_separator() {
    let warnings = lint("1#one|oops|#other");
    assert_eq!(
        warnings,
        vec![ChoiceWarning::MissingSeparator {
            index: 1,
            entry: "oops".to_string()
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"choice 1 has no '#' separator, so its text is empty: 'oops'"
    );
}

#[test]
fn lint_shadowed_default() {
    let warnings = lint("#a|x#y|#b");
    assert_eq!(
        warnings,
        vec![ChoiceWarning::ShadowedDefault {
            index: 2,
            previous: 0
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"choice 2 replaces the default text from choice 0"
    );
}

#[test]
fn lint_each_extra_default_is_reported() {
    let warnings = lint("#a|#b|#c");
    assert_eq!(
        warnings,
        vec![
            ChoiceWarning::ShadowedDefault {
                index: 1,
                previous: 0
            },
            ChoiceWarning::ShadowedDefault {
                index: 2,
                previous: 1
            },
        ]
    );
}

// =============================================================================
// Selector warnings
// =============================================================================

#[test]
fn lint_invalid_pattern() {
    let warnings = lint("(#broken|#other");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        ChoiceWarning::InvalidPattern { index: 0, selector, .. } if selector == "("
    ));
}

#[test]
fn lint_uppercase_pattern() {
    let warnings = lint("Male#m|#f");
    assert_eq!(
        warnings,
        vec![ChoiceWarning::UppercasePattern {
            index: 0,
            selector: "Male".to_string()
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"choice 0 selector 'Male' has upper-case letters and never matches a text reference"
    );
}

#[test]
fn lint_uppercase_keywords_are_fine() {
    assert!(lint("TRUE#t|FALSE#f").is_empty());
}

#[test]
fn lint_uppercase_allowed_when_folding() {
    let options = MatchOptions::builder().fold_pattern_case(true).build();
    assert!(lint_choices("Male#m|#f", &options).is_empty());
}

#[test]
fn lint_unparsable_bound() {
    let warnings = lint("<ten#few|#many");
    assert_eq!(
        warnings,
        vec![ChoiceWarning::UnparsableBound {
            index: 0,
            selector: "<ten".to_string()
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"choice 0 selector '<ten' has a non-numeric bound, which compares as 0"
    );
}

#[test]
fn lint_near_boolean_keyword() {
    let warnings = lint("ture#on|fasle#off");
    assert_eq!(
        warnings,
        vec![
            ChoiceWarning::NearBooleanKeyword {
                index: 0,
                selector: "ture".to_string(),
                suggestion: "true".to_string()
            },
            ChoiceWarning::NearBooleanKeyword {
                index: 1,
                selector: "fasle".to_string(),
                suggestion: "false".to_string()
            },
        ]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"choice 0 selector 'ture' is not a keyword; did you mean 'true'?"
    );
}

#[test]
fn lint_near_keyword_short_form() {
    let warnings = lint("yep#a|#b");
    assert_eq!(
        warnings,
        vec![ChoiceWarning::NearBooleanKeyword {
            index: 0,
            selector: "yep".to_string(),
            suggestion: "yes".to_string()
        }]
    );
}

// =============================================================================
// Facade and serialization
// =============================================================================

#[test]
fn message_lint_uses_message_options() {
    let options = MatchOptions::builder().fold_pattern_case(true).build();
    assert!(Message::with_options("Male#m", options).lint().is_empty());
    assert_eq!(Message::new("Male#m").lint().len(), 1);
}

#[test]
fn lint_does_not_change_resolution() {
    let message = Message::new("1#one|oops|#other");
    assert_eq!(message.lint().len(), 1);
    assert_eq!(message.choice(1).unwrap().as_str(), "one");
    assert_eq!(message.choice(2).unwrap().as_str(), "other");
}

#[test]
fn warnings_serialize_with_kind_tag() {
    let warning = ChoiceWarning::ShadowedDefault {
        index: 2,
        previous: 0,
    };
    assert_eq!(
        serde_json::to_value(&warning).unwrap(),
        json!({ "kind": "shadowed_default", "index": 2, "previous": 0 })
    );
}
