mod sink;

pub use sink::RecordSink;

use serde::{Deserialize, Serialize};

/// Output columns, in serialization order
pub const COLUMNS: [&str; 9] = [
    "Company Name",
    "Event Name",
    "Day of Event",
    "Start Time",
    "End Time",
    "Function Type",
    "Function Space",
    "Setup Style",
    "Raw Line",
];

/// One scheduled function extracted from a single line
///
/// Fields that could not be detected are empty strings. Times are kept
/// exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Company Name")]
    pub company: String,
    #[serde(rename = "Event Name")]
    pub event: String,
    #[serde(rename = "Day of Event")]
    pub date: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Function Type")]
    pub function_type: String,
    #[serde(rename = "Function Space")]
    pub function_space: String,
    #[serde(rename = "Setup Style")]
    pub setup_style: String,
    /// Source line, kept for auditing
    #[serde(rename = "Raw Line")]
    pub raw_line: String,
}

impl EventRecord {
    /// Field values in `COLUMNS` order
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.company,
            &self.event,
            &self.date,
            &self.start_time,
            &self.end_time,
            &self.function_type,
            &self.function_space,
            &self.setup_style,
            &self.raw_line,
        ]
    }
}
