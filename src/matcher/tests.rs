use super::*;
use crate::vocabulary::Vocabulary;

fn default_matchers() -> FieldMatchers {
    FieldMatchers::new(&Vocabulary::default()).unwrap()
}

// ========================================================================
// Function type
// ========================================================================

#[test]
fn test_function_type_basic() {
    let m = default_matchers();
    assert_eq!(m.function_type("12:00 PM - 1:00 PM Lunch Salon I"), Some("Lunch"));
    assert_eq!(m.function_type("6:00 PM - 9:00 PM dinner"), Some("Dinner"));
    assert_eq!(m.function_type("9:00 AM - 10:00 AM Nothing here"), None);
}

#[test]
fn test_function_type_prefers_multi_word_entry() {
    let m = default_matchers();
    assert_eq!(
        m.function_type("3:15 PM - 3:30 PM Coffee Break"),
        Some("Coffee Break")
    );
    assert_eq!(
        m.function_type("8:00 AM - 5:00 PM Board Meeting Boardroom"),
        Some("Board Meeting")
    );
    assert_eq!(
        m.function_type("5:00 PM - 6:00 PM Cocktail Reception"),
        Some("Cocktail Reception")
    );
}

#[test]
fn test_continental_overrides_other_matches() {
    let m = default_matchers();
    assert_eq!(
        m.function_type("7:00 AM - 8:00 AM Continental Meeting Envoy"),
        Some(CONTINENTAL_BREAKFAST)
    );
    assert_eq!(
        m.function_type("7:00 AM - 8:00 AM continental"),
        Some(CONTINENTAL_BREAKFAST)
    );
}

#[test]
fn test_continental_requires_whole_word() {
    let m = default_matchers();
    assert_eq!(
        m.function_type("7:00 AM - 8:00 AM Intercontinental Lunch"),
        Some("Lunch")
    );
}

#[test]
fn test_function_type_substituted_vocabulary() {
    let vocab = Vocabulary {
        function_types: vec!["Gala".to_string()],
        ..Vocabulary::default()
    };
    let m = FieldMatchers::new(&vocab).unwrap();
    assert_eq!(m.function_type("7:00 PM - 11:00 PM Gala Dinner"), Some("Gala"));
}

// ========================================================================
// Setup style
// ========================================================================

#[test]
fn test_setup_style() {
    let m = default_matchers();
    assert_eq!(
        m.setup_style("2:00 PM - 3:00 PM Lunch Salon I Rounds of 10"),
        Some("Rounds of 10")
    );
    assert_eq!(m.setup_style("9:00 AM - 5:00 PM Meeting u-shape"), Some("U-Shape"));
    assert_eq!(
        m.setup_style("9:00 AM - 5:00 PM Meeting Chevron Theatre"),
        Some("Chevron Theatre")
    );
    assert_eq!(m.setup_style("9:00 AM - 5:00 PM Meeting"), None);
}

#[test]
fn test_setup_style_rounds_do_not_collide() {
    let m = default_matchers();
    assert_eq!(m.setup_style("Rounds of 100"), None);
    assert_eq!(m.setup_style("Rounds of 8"), Some("Rounds of 8"));
}

// ========================================================================
// Space hint
// ========================================================================

#[test]
fn test_space_hint_is_case_sensitive() {
    let m = default_matchers();
    assert_eq!(m.space_hint("9:00 AM - 5:00 PM Meeting Envoy"), Some("Envoy"));
    assert_eq!(m.space_hint("9:00 AM - 5:00 PM Meeting envoy"), None);
}

#[test]
fn test_space_hint_longest_first() {
    let m = default_matchers();
    assert_eq!(
        m.space_hint("9:00 AM - 5:00 PM Meeting Gallery II Prefunction"),
        Some("Gallery II Prefunction")
    );
    assert_eq!(
        m.space_hint("6:00 PM - 9:00 PM Dinner The Whitley Ballroom"),
        Some("The Whitley Ballroom")
    );
    assert_eq!(
        m.space_hint("12:00 PM - 1:00 PM Lunch Plaza II & III"),
        Some("Plaza II & III")
    );
}

#[test]
fn test_space_hint_absent() {
    let m = default_matchers();
    assert_eq!(m.space_hint("3:15 PM - 3:30 PM Coffee Break"), None);
}
