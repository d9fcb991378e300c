// Public API exports
pub mod classifier;
pub mod document;
pub mod error;
pub mod export;
pub mod matcher;
pub mod pipeline;
pub mod record;
pub mod space;
pub mod vocabulary;

// Re-export main types for convenience
pub use error::BeoError;

pub use vocabulary::{Grouping, Vocabulary, VocabularyScanner};

pub use classifier::{Context, LastSpaceMemory, LineClassifier, LineOutcome, ParseState};
pub use space::SpaceResolver;

pub use document::{Document, Page};
pub use pipeline::{ExtractionSummary, Extractor};
pub use record::{EventRecord, RecordSink, COLUMNS};

pub use export::{default_output_path, write_csv, write_file, write_json, OutputFormat, Report};
