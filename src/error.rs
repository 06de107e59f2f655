//! Error types for rust-sqlgen

use thiserror::Error;

/// Errors that can occur during SQL generation
///
/// Every variant represents a caller programming error against an immutable
/// dialect contract. Nothing here is transient: the engine performs no I/O,
/// so there is no retry policy and no partial failure to report.
#[derive(Error, Debug)]
pub enum SqlGenError {
    #[error("Column length required for {type_name} declaration")]
    ColumnLengthRequired { type_name: &'static str },

    #[error("{platform} does not support {capability}")]
    UnsupportedCapability {
        platform: &'static str,
        capability: &'static str,
    },

    #[error("Invalid diff for table {table}: {message}")]
    InvalidDiff { table: String, message: String },

    #[error("Unknown logical type name: {name}")]
    UnknownType { name: String },
}

impl SqlGenError {
    pub(crate) fn invalid_diff(table: &str, message: impl Into<String>) -> Self {
        SqlGenError::InvalidDiff {
            table: table.to_string(),
            message: message.into(),
        }
    }
}
