use super::ParseState;
use crate::error::BeoError;
use crate::matcher::{self, FieldMatchers};
use crate::record::EventRecord;
use crate::space::SpaceResolver;
use crate::vocabulary::Vocabulary;
use std::collections::HashSet;
use tracing::{debug, trace};

/// What a single line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,
    /// "Quote #:" line; company context updated
    CompanyHeader,
    /// "Folio #:" line; event context updated when a name was present
    EventHeader,
    /// "Weekday, ... YYYY" line; date context updated
    DateHeader,
    /// No time range, so no schedule information
    NoTimeRange,
    /// Time range found but no space could be resolved
    Unresolved,
    /// A function line that produced a record
    Record(EventRecord),
}

/// Classifies lines one at a time against a caller-owned [`ParseState`]
pub struct LineClassifier {
    fields: FieldMatchers,
    spaces: SpaceResolver,
    carry_forward: HashSet<String>,
}

impl LineClassifier {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, BeoError> {
        Ok(Self {
            fields: FieldMatchers::new(vocabulary)?,
            spaces: SpaceResolver::new(vocabulary)?,
            carry_forward: vocabulary.carry_forward_types.iter().cloned().collect(),
        })
    }

    /// Classify one line, updating `state` and returning its outcome
    ///
    /// Header lines only touch the context. Function lines need a time range
    /// and a resolved space to become a record; the resolved space is then
    /// remembered for the current (company, event).
    pub fn classify(&self, state: &mut ParseState, raw: &str) -> LineOutcome {
        let line = raw.trim();
        if line.is_empty() {
            return LineOutcome::Blank;
        }

        if let Some(company) = matcher::company_header(line) {
            debug!(company, "company header");
            state.context.company = Some(company.to_string());
            return LineOutcome::CompanyHeader;
        }

        if matcher::is_event_header(line) {
            if let Some(event) = matcher::event_header(line) {
                debug!(event, "event header");
                state.context.event = Some(event.to_string());
            }
            return LineOutcome::EventHeader;
        }

        if matcher::is_date_header(line) {
            debug!(date = line, "date header");
            state.context.date = Some(line.to_string());
            return LineOutcome::DateHeader;
        }

        let Some(times) = matcher::match_time_range(line) else {
            return LineOutcome::NoTimeRange;
        };

        let function_type = self.fields.function_type(line);
        let setup_style = self.fields.setup_style(line);
        let hint = self.fields.space_hint(line);

        let mut space = self
            .spaces
            .resolve(line, hint)
            .filter(|s| !s.is_empty());

        if space.as_deref().is_some_and(matcher::is_guest_count) {
            trace!(line, "discarding guest-count space");
            space = None;
        }

        let key = state.context.key();

        if space.is_none() && function_type.is_some_and(|ft| self.carry_forward.contains(ft)) {
            space = state.memory.get(&key).map(str::to_string);
            if let Some(inherited) = &space {
                trace!(line, space = inherited.as_str(), "space carried forward");
            }
        }

        let Some(space) = space else {
            trace!(line, "no space resolved, dropping line");
            return LineOutcome::Unresolved;
        };

        state.memory.remember(key, space.clone());

        let record = EventRecord {
            company: state.context.company.clone().unwrap_or_default(),
            event: state.context.event.clone().unwrap_or_default(),
            date: state.context.date.clone().unwrap_or_default(),
            start_time: times.start,
            end_time: times.end,
            function_type: function_type.unwrap_or_default().to_string(),
            function_space: space,
            setup_style: setup_style.unwrap_or_default().to_string(),
            raw_line: line.to_string(),
        };
        debug!(
            start = record.start_time.as_str(),
            function_type = record.function_type.as_str(),
            space = record.function_space.as_str(),
            "record"
        );

        LineOutcome::Record(record)
    }
}
