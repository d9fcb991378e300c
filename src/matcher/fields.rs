use crate::error::BeoError;
use crate::vocabulary::{Vocabulary, VocabularyScanner};
use once_cell::sync::Lazy;
use regex::Regex;

/// Function type forced whenever "Continental" appears on a line
pub const CONTINENTAL_BREAKFAST: &str = "Continental Breakfast";

static CONTINENTAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bContinental\b").unwrap());

/// Vocabulary-driven detectors for the typed fields of a function line
#[derive(Debug, Clone)]
pub struct FieldMatchers {
    function_types: VocabularyScanner,
    setup_styles: VocabularyScanner,
    space_hints: VocabularyScanner,
}

impl FieldMatchers {
    /// Compile scanners for every vocabulary table
    ///
    /// Function types and setup styles match regardless of case; space
    /// names are proper nouns and must match exactly.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, BeoError> {
        Ok(Self {
            function_types: VocabularyScanner::new(&vocabulary.function_types, true)?,
            setup_styles: VocabularyScanner::new(&vocabulary.setup_styles, true)?,
            space_hints: VocabularyScanner::new(&vocabulary.space_hints, false)?,
        })
    }

    pub fn function_type<'a>(&'a self, line: &str) -> Option<&'a str> {
        if CONTINENTAL_RE.is_match(line) {
            return Some(CONTINENTAL_BREAKFAST);
        }
        self.function_types.find(line)
    }

    pub fn setup_style<'a>(&'a self, line: &str) -> Option<&'a str> {
        self.setup_styles.find(line)
    }

    /// Raw space name as written on the line, before any grouping
    pub fn space_hint<'a>(&'a self, line: &str) -> Option<&'a str> {
        self.space_hints.find(line)
    }
}
