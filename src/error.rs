//! Error types for the ACS import pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::acs::StatType;

/// Result type alias for import operations.
pub type Result<T> = core::result::Result<T, ImportError>;

/// Every failure aborts the import; nothing here is transient.
#[derive(Debug, Error)]
pub enum ImportError {
    /// A geography record whose record-number field is not a positive integer,
    /// or which is too short to carry the fields the directory reads.
    #[error("malformed geography record {geo_id}: {reason}")]
    MalformedRecord { geo_id: String, reason: String },

    /// Inputs that contradict each other (county before its state, fragment not requested).
    #[error("consistency error: {0}")]
    Consistency(String),

    /// A fragment whose statistic type has no descriptor in the current request.
    #[error("unexpected {stat} fragment for geography {geo_id}")]
    UnknownFragment { geo_id: String, stat: StatType },

    /// Expected sequence file is missing or unreadable.
    #[error("error opening '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record number points past the end of a sequence file.
    #[error("record {record_number} for geography {geo_id} not found in '{}' ({rows} rows)", path.display())]
    RecordNotFound {
        geo_id: String,
        record_number: u32,
        rows: usize,
        path: PathBuf,
    },

    /// Sequence row too short for a descriptor's field range.
    #[error("row for geography {geo_id} in '{}' has {found} fields, {stat} needs {required}", path.display())]
    TruncatedRow {
        geo_id: String,
        stat: StatType,
        required: usize,
        found: usize,
        path: PathBuf,
    },

    /// A field that should be an integer but isn't.
    #[error("invalid {stat} field {value:?} for geography {geo_id} in '{}'", path.display())]
    FieldFormat {
        geo_id: String,
        stat: StatType,
        value: String,
        path: PathBuf,
    },

    /// A statistic needed downstream was never loaded for this geography.
    #[error("geography {geo_id} has no {stat} statistic")]
    MissingStatistic { geo_id: String, stat: StatType },

    /// Underlying tabular read failure.
    #[error("failed to read '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },
}

/// Errors raised by the apportionment calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApportionError {
    /// Fewer seats than states; each state is owed at least one.
    #[error("cannot apportion {seats} seats among {states} states")]
    Precondition { seats: u32, states: usize },
}
