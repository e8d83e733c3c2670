// File: src/error.rs
//! Error taxonomy for asset loading and scoring.
//!
//! Every variant here is fatal to the operation that raised it. Per-field
//! input problems are not errors; see [`crate::core::validator::ValidationOutcome`].

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, DatError>;

#[derive(Debug, Error)]
pub enum DatError {
    /// Lemma list or form map is inconsistent.
    #[error("Malformed dictionary: {reason}")]
    MalformedDictionary { reason: String },

    /// Matrix header declares a vector dimension other than the expected one.
    #[error("Unexpected dimension: {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Matrix payload length does not equal `num_words * dim`.
    #[error("Matrix size mismatch: {actual} bytes vs {expected} expected")]
    SizeMismatch { expected: usize, actual: usize },

    /// Buffer is shorter than the 8-byte matrix header.
    #[error("Matrix header truncated: need 8 bytes, have {actual}")]
    TruncatedHeader { actual: usize },

    /// More rows than the `u32` header field can declare.
    #[error("Matrix has {actual} rows; the header holds at most {max}")]
    TooManyRows { actual: usize, max: usize },

    #[error("Row index {index} out of range (matrix has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Insufficient words: need {required} distinct lemmas, got {actual}")]
    InsufficientWords { required: usize, actual: usize },

    /// A lemma handed to the scorer has no row in the lexicon.
    #[error("Unknown lemma: '{0}'")]
    UnknownLemma(String),

    /// Lexicon and embedding matrix describe a different number of words.
    #[error("Lexicon has {lemmas} lemmas but matrix has {rows} rows")]
    RowCountMismatch { lemmas: usize, rows: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot was built from different `words.json` / `forms.json` bytes.
    #[error("Snapshot '{}' is out of date with its JSON sources", .path.display())]
    StaleSnapshot { path: std::path::PathBuf },

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
