use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vocabulary table `{table}` must not be empty")]
    EmptyVocabulary { table: &'static str },

    #[error("Vocabulary table `{table}` contains a blank entry")]
    BlankEntry { table: &'static str },

    #[error("Invalid pattern for vocabulary entry {entry:?}: {source}")]
    Pattern {
        entry: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}
