//! Built-in vocabulary for the property's banquet event order layout.

use super::Grouping;

pub(crate) const FUNCTION_TYPES: &[&str] = &[
    "Meeting",
    "Breakout",
    "Breakfast",
    "Lunch",
    "Dinner",
    "Reception",
    "Cocktail Reception",
    "Board Meeting",
    "General Session",
    "Set Up",
    "Holding Room",
    "Dance",
    "Ceremony",
    "Brunch",
    "Box Lunch",
    "PM Break",
    "AM Break",
    "Coffee Break",
    "Continuous Break",
    "Hospitality Room",
    "24 Hour Hold",
    "Storage",
    "Office",
    "Registration",
    "Rehearsal",
    "Special",
    "Buffet",
    "Exhibits",
    "Continental Breakfast",
    "Teardown",
    "No Agenda Hold",
];

pub(crate) const SPACE_HINTS: &[&str] = &[
    "Director's Room",
    "The Founders Room",
    "Legacy Ballroom",
    "Legacy Ballroom I",
    "Legacy Ballroom II",
    "Legacy I",
    "Legacy II",
    "Legacy Prefunction",
    "The Gallery",
    "Gallery",
    "Gallery I",
    "Gallery II",
    "Gallery Prefunction",
    "Gallery I Prefunction",
    "Gallery II Prefunction",
    "The Gallery Lounge",
    "Trade Root Restaurant",
    "Boardroom",
    "Envoy",
    "Diplomat",
    "Ambassador",
    "Plaza I",
    "Plaza II",
    "Plaza III",
    "Plaza II & III",
    "Plaza",
    "Plaza Prefunction",
    "Salon I",
    "Salon II",
    "Salon III",
    "Salon IV",
    "Salon V",
    "Salon VI",
    "Salon VII",
    "Salon VIII",
    "Prefunction",
    "2nd Floor Prefunction",
    "Whitley Prefunction",
    "Consulate",
    "Delegate",
    "Attache",
    "Charge",
    "The Whitley Ballroom",
    "Whitley Ballroom",
];

pub(crate) const SETUP_STYLES: &[&str] = &[
    "Conference",
    "Rounds of 10",
    "Rounds of 8",
    "Rounds of 6",
    "Chevron Theatre",
    "Schoolroom",
    "U-Shape",
    "Hollow Square",
    "Cocktail Rounds",
    "Theatre",
    "Special",
    "Crescent Rounds",
    "Lounge",
    "Storage",
];

/// Ballroom name, section prefix, and named sections, in resolution priority order.
pub(crate) const GROUPINGS: &[(&str, &str, &[&str])] = &[
    (
        "Whitley Ballroom",
        "Salon",
        &[
            "Salon I", "Salon II", "Salon III", "Salon IV", "Salon V", "Salon VI", "Salon VII",
            "Salon VIII",
        ],
    ),
    ("Plaza Ballroom", "Plaza", &["Plaza I", "Plaza II", "Plaza III"]),
    ("Legacy Ballroom", "Legacy", &["Legacy I", "Legacy II"]),
];

/// Position + 1 is the ordinal value.
pub(crate) const ROMAN_ORDER: &[&str] = &["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Function types whose rows may inherit the last space of the same event.
pub(crate) const CARRY_FORWARD_TYPES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Reception",
    "Cocktail Reception",
    "AM Break",
    "PM Break",
    "Coffee Break",
    "Continuous Break",
    "Box Lunch",
    "Buffet",
    "Continental Breakfast",
    "Meeting",
    "Rehearsal",
    "Exhibits",
];

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn default_function_types() -> Vec<String> {
    owned(FUNCTION_TYPES)
}

pub(crate) fn default_space_hints() -> Vec<String> {
    owned(SPACE_HINTS)
}

pub(crate) fn default_setup_styles() -> Vec<String> {
    owned(SETUP_STYLES)
}

pub(crate) fn default_groupings() -> Vec<Grouping> {
    GROUPINGS
        .iter()
        .map(|(ballroom, prefix, subspaces)| Grouping {
            ballroom: ballroom.to_string(),
            prefix: prefix.to_string(),
            subspaces: owned(subspaces),
        })
        .collect()
}

pub(crate) fn default_roman_order() -> Vec<String> {
    owned(ROMAN_ORDER)
}

pub(crate) fn default_carry_forward_types() -> Vec<String> {
    owned(CARRY_FORWARD_TYPES)
}
