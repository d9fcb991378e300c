use crate::error::BeoError;
use crate::vocabulary::{roman_rank, whole_word, Grouping, Vocabulary};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// "&" or "and" between the last two numerals of a section list.
static LIST_CONJUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*(?:&|and)\s*").unwrap());

static ROMAN_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[IVX]+$").unwrap());

/// Compiled matchers for one ballroom grouping
#[derive(Debug, Clone)]
struct Family {
    ballroom: String,
    prefix: String,
    /// `<prefix> I, II & III` style lists
    section_list: Regex,
    /// Named sections with the numeral each contributes
    sections: Vec<(String, Regex)>,
}

impl Family {
    fn compile(grouping: &Grouping) -> Result<Self, BeoError> {
        let pattern = format!(
            r"\b{}\b\s+([IVX]+(?:\s*,\s*[IVX]+)*(?:\s*(?:&|and)\s*[IVX]+)?)",
            regex::escape(&grouping.prefix)
        );
        let section_list = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| BeoError::Pattern {
                entry: grouping.prefix.clone(),
                source,
            })?;

        let sections = grouping
            .subspaces
            .iter()
            .map(|name| {
                let numeral = name.split_whitespace().last().unwrap_or_default().to_string();
                whole_word(name, false).map(|re| (numeral, re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            ballroom: grouping.ballroom.clone(),
            prefix: grouping.prefix.clone(),
            section_list,
            sections,
        })
    }

    /// Numerals of every section of this ballroom mentioned on the line
    fn collect_numerals(&self, line: &str) -> Vec<String> {
        let mut numerals: Vec<String> = self
            .section_list
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .flat_map(|list| split_roman_list(list.as_str()))
            .collect();

        for (numeral, re) in &self.sections {
            if re.is_match(line) {
                numerals.push(numeral.clone());
            }
        }

        numerals
    }
}

/// Split "I, II & III" into its numerals, dropping anything that is not one
pub(crate) fn split_roman_list(list: &str) -> Vec<String> {
    LIST_CONJUNCTION_RE
        .replace_all(list, ",")
        .split(',')
        .map(str::trim)
        .filter(|part| ROMAN_TOKEN_RE.is_match(part))
        .map(str::to_string)
        .collect()
}

/// Collapses ballroom section references into one grouped label
///
/// "Salon I, II & III" and "Salon III ... Salon I" both resolve to
/// `Whitley Ballroom (Salon I, Salon III)`-style labels. Lines without any
/// section reference keep their raw space hint.
#[derive(Debug, Clone)]
pub struct SpaceResolver {
    families: Vec<Family>,
    roman_order: Vec<String>,
}

impl SpaceResolver {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, BeoError> {
        let families = vocabulary
            .groupings
            .iter()
            .map(Family::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            families,
            roman_order: vocabulary.roman_order.clone(),
        })
    }

    /// Resolve the space for a line
    ///
    /// # Arguments
    /// * `line` - Full function line
    /// * `primary` - Raw space hint found on the line, if any
    ///
    /// # Returns
    /// The grouped label of the first ballroom (in priority order) with a
    /// section on the line, otherwise `primary` unchanged.
    pub fn resolve(&self, line: &str, primary: Option<&str>) -> Option<String> {
        for family in &self.families {
            let mut numerals = family.collect_numerals(line);
            if numerals.is_empty() {
                continue;
            }

            numerals.sort_by(|a, b| {
                roman_rank(&self.roman_order, a)
                    .cmp(&roman_rank(&self.roman_order, b))
                    .then_with(|| a.cmp(b))
            });
            numerals.dedup();

            let sections: Vec<String> = numerals
                .iter()
                .map(|numeral| format!("{} {}", family.prefix, numeral))
                .collect();

            return Some(format!("{} ({})", family.ballroom, sections.join(", ")));
        }

        primary.map(str::to_string)
    }
}
