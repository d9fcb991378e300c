use crate::classifier::{LineClassifier, LineOutcome, ParseState};
use crate::document::Document;
use crate::error::BeoError;
use crate::record::RecordSink;
use crate::vocabulary::Vocabulary;
use serde::Serialize;
use tracing::{info, warn};

/// Line counts by outcome for one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub lines: usize,
    pub blank: usize,
    pub headers: usize,
    pub no_time_range: usize,
    pub unresolved: usize,
    pub records: usize,
}

impl ExtractionSummary {
    fn count(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Blank => self.blank += 1,
            LineOutcome::CompanyHeader | LineOutcome::EventHeader | LineOutcome::DateHeader => {
                self.headers += 1
            }
            LineOutcome::NoTimeRange => self.no_time_range += 1,
            LineOutcome::Unresolved => self.unresolved += 1,
            LineOutcome::Record(_) => self.records += 1,
        }
    }
}

/// Turns documents into event records
///
/// Holds only compiled, read-only vocabulary state. Every call to
/// [`Extractor::extract`] starts from an empty [`ParseState`], so runs are
/// independent and repeatable.
pub struct Extractor {
    vocabulary: Vocabulary,
    classifier: LineClassifier,
}

impl Extractor {
    pub fn new(vocabulary: Vocabulary) -> Result<Self, BeoError> {
        vocabulary.validate()?;
        let classifier = LineClassifier::new(&vocabulary)?;
        Ok(Self {
            vocabulary,
            classifier,
        })
    }

    /// Extractor over the built-in vocabulary
    pub fn with_default_vocabulary() -> Result<Self, BeoError> {
        Self::new(Vocabulary::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn extract(&self, document: &Document) -> RecordSink {
        self.extract_lines(document.lines()).0
    }

    pub fn extract_with_summary(&self, document: &Document) -> (RecordSink, ExtractionSummary) {
        self.extract_lines(document.lines())
    }

    /// Fold lines, in order, into records
    pub fn extract_lines<'a, I>(&self, lines: I) -> (RecordSink, ExtractionSummary)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = ParseState::new();
        let mut sink = RecordSink::new();
        let mut summary = ExtractionSummary::default();

        for line in lines {
            let outcome = self.classifier.classify(&mut state, line);
            summary.count(&outcome);
            if let LineOutcome::Record(record) = outcome {
                sink.push(record);
            }
        }

        if sink.is_empty() {
            warn!(
                lines = summary.lines,
                "no event records found; input does not look like an event order"
            );
        } else {
            info!(
                records = summary.records,
                lines = summary.lines,
                unresolved = summary.unresolved,
                "extraction complete"
            );
        }

        (sink, summary)
    }
}
