use crate::error::BeoError;
use crate::pipeline::ExtractionSummary;
use crate::record::{EventRecord, COLUMNS};
use chrono::Utc;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Supported output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// JSON output envelope
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: String,
    pub generated_at: String,
    pub generator: String,
    pub record_count: usize,
    pub summary: ExtractionSummary,
    pub records: &'a [EventRecord],
}

impl<'a> Report<'a> {
    pub fn new(
        source: impl Into<String>,
        records: &'a [EventRecord],
        summary: ExtractionSummary,
    ) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            generator: format!("beoparse v{}", env!("CARGO_PKG_VERSION")),
            record_count: records.len(),
            summary,
            records,
        }
    }
}

/// `<input stem>_parsed.<ext>` next to the input file
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_parsed.{}", stem, format.extension()))
}

/// Write the header row and one row per record
///
/// The header is written even when there are no records.
pub fn write_csv<W: Write>(records: &[EventRecord], writer: W) -> Result<(), BeoError> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(COLUMNS)?;
    for record in records {
        csv.write_record(record.fields())?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &Report<'_>, mut writer: W) -> Result<(), BeoError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write records to `path` in the given format
pub fn write_file(
    path: &Path,
    format: OutputFormat,
    source: &str,
    records: &[EventRecord],
    summary: ExtractionSummary,
) -> Result<(), BeoError> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(records, writer),
        OutputFormat::Json => write_json(&Report::new(source, records, summary), writer),
    }
}
