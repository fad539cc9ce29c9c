//! Error types for the tabula library.

use thiserror::Error;

/// Main error type for schema inference.
///
/// Every variant is a local invalid-input failure reported synchronously
/// to the caller; none are retried and no partial schema is ever returned.
#[derive(Debug, Error)]
pub enum TabulaError {
    /// Fewer than two records were supplied.
    #[error("schema inference requires at least two records, got {0}")]
    InsufficientData(usize),

    /// A batch element is not a well-formed fixed-arity field-tuple.
    #[error("record {index} does not match the batch shape: {reason}")]
    NotUniformShape { index: usize, reason: String },

    /// The batch mixes records with varying type identities.
    #[error("records in the batch have varying types: {}", .0.join(", "))]
    MixedRecordTypes(Vec<String>),

    /// A column's values cannot be unified under any supported type rule.
    #[error("no column type unifies the values of column '{0}'")]
    UnunifiableColumn(String),
}

/// Result type alias for tabula operations.
pub type Result<T> = std::result::Result<T, TabulaError>;
