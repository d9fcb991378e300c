mod scanner;
mod tables;


pub use scanner::VocabularyScanner;
pub(crate) use scanner::whole_word;

use crate::error::BeoError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A ballroom and the named sections it can be divided into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    /// Canonical ballroom name used in grouped labels (e.g., "Whitley Ballroom")
    pub ballroom: String,
    /// Word that introduces a section list (e.g., "Salon")
    pub prefix: String,
    /// Named sections, each "<prefix> <numeral>"
    pub subspaces: Vec<String>,
}

/// Domain terms the extractor recognizes
///
/// Immutable once an extractor is built from it. Any table left out of a
/// JSON vocabulary file falls back to the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "tables::default_function_types")]
    pub function_types: Vec<String>,
    #[serde(default = "tables::default_space_hints")]
    pub space_hints: Vec<String>,
    #[serde(default = "tables::default_setup_styles")]
    pub setup_styles: Vec<String>,
    /// Ballroom groupings in resolution priority order
    #[serde(default = "tables::default_groupings")]
    pub groupings: Vec<Grouping>,
    /// Roman numerals in ordinal order
    #[serde(default = "tables::default_roman_order")]
    pub roman_order: Vec<String>,
    /// Function types allowed to inherit the previous space of their event
    #[serde(default = "tables::default_carry_forward_types")]
    pub carry_forward_types: Vec<String>,
}

impl Vocabulary {
    /// Parse a (possibly partial) vocabulary from JSON
    pub fn from_json_str(json: &str) -> Result<Self, BeoError> {
        let vocabulary: Vocabulary = serde_json::from_str(json)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load a vocabulary file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BeoError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject vocabularies the extractor cannot work with
    pub fn validate(&self) -> Result<(), BeoError> {
        if self.function_types.is_empty() {
            return Err(BeoError::EmptyVocabulary {
                table: "function_types",
            });
        }
        if self.space_hints.is_empty() {
            return Err(BeoError::EmptyVocabulary {
                table: "space_hints",
            });
        }
        if self.groupings.is_empty() {
            return Err(BeoError::EmptyVocabulary { table: "groupings" });
        }

        // A blank term compiles to a pattern that matches every line
        let tables: [(&'static str, &[String]); 5] = [
            ("function_types", &self.function_types),
            ("space_hints", &self.space_hints),
            ("setup_styles", &self.setup_styles),
            ("roman_order", &self.roman_order),
            ("carry_forward_types", &self.carry_forward_types),
        ];
        for (table, entries) in tables {
            if entries.iter().any(|e| is_blank(e)) {
                return Err(BeoError::BlankEntry { table });
            }
        }
        let blank_grouping = self.groupings.iter().any(|g| {
            is_blank(&g.ballroom) || is_blank(&g.prefix) || g.subspaces.iter().any(|s| is_blank(s))
        });
        if blank_grouping {
            return Err(BeoError::BlankEntry { table: "groupings" });
        }
        Ok(())
    }

    /// Ordinal value of a roman numeral; unknown numerals rank last
    pub fn roman_rank(&self, numeral: &str) -> usize {
        roman_rank(&self.roman_order, numeral)
    }

    /// Whether rows of this function type may inherit a previous space
    pub fn carries_forward(&self, function_type: &str) -> bool {
        self.carry_forward_types.iter().any(|t| t == function_type)
    }

    /// Serialize the vocabulary as pretty JSON
    pub fn to_json_pretty(&self) -> Result<String, BeoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn is_blank(entry: &str) -> bool {
    entry.trim().is_empty()
}

/// Ordinal value of `numeral` within `order`, or `usize::MAX` when absent
pub(crate) fn roman_rank(order: &[String], numeral: &str) -> usize {
    order
        .iter()
        .position(|r| r == numeral)
        .map(|i| i + 1)
        .unwrap_or(usize::MAX)
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            function_types: tables::default_function_types(),
            space_hints: tables::default_space_hints(),
            setup_styles: tables::default_setup_styles(),
            groupings: tables::default_groupings(),
            roman_order: tables::default_roman_order(),
            carry_forward_types: tables::default_carry_forward_types(),
        }
    }
}
