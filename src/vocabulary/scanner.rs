use crate::error::BeoError;
use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;

/// Whole-word matcher over a fixed list of names
///
/// Names are tried longest first (by character count); names of equal length
/// keep their table order. The first name found anywhere in the text wins.
#[derive(Debug, Clone)]
pub struct VocabularyScanner {
    entries: Vec<(String, Regex)>,
}

impl VocabularyScanner {
    /// Compile a scanner for `names`
    ///
    /// # Arguments
    /// * `names` - Vocabulary entries in table order
    /// * `case_insensitive` - Whether entries match regardless of letter case
    pub fn new<S: AsRef<str>>(names: &[S], case_insensitive: bool) -> Result<Self, BeoError> {
        let mut ordered: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
        // sort_by_key is stable, so equal lengths stay in table order
        ordered.sort_by_key(|name| Reverse(name.chars().count()));

        let entries = ordered
            .into_iter()
            .map(|name| {
                whole_word(name, case_insensitive).map(|re| (name.to_string(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Return the first entry that occurs in `text` as a whole word
    pub fn find(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(name, _)| name.as_str())
    }

    /// Entries in scan order
    pub fn scan_order(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a `\b<literal>\b` pattern for a vocabulary entry
pub(crate) fn whole_word(name: &str, case_insensitive: bool) -> Result<Regex, BeoError> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(name)))
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| BeoError::Pattern {
            entry: name.to_string(),
            source,
        })
}
