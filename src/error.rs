//! Error types for loading Open311 files into DynamoDB.

use std::path::PathBuf;

use thiserror::Error;

use crate::dynamodb::StoreError;

/// Result type alias for the loader.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that stop the load of one record kind.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse '{}', check its JSON syntax: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record #{position} in '{}' has an empty '{field}'", .path.display())]
    EmptyKey {
        path: PathBuf,
        position: usize,
        field: &'static str,
    },

    #[error("cannot provision table '{table}': {reason}")]
    Provision { table: String, reason: String },

    #[error("table '{table}' was not active after {attempts} status checks")]
    ProvisionTimeout { table: String, attempts: u32 },

    #[error("cannot marshal record #{position} for table '{table}' ({written} written): {reason}")]
    Serialization {
        table: String,
        position: usize,
        written: usize,
        reason: String,
    },

    #[error("put of '{key}' into table '{table}' failed ({written} written): {source}")]
    Write {
        table: String,
        key: String,
        written: usize,
        #[source]
        source: StoreError,
    },
}

impl LoadError {
    /// Items stored before the failure. Only bulk-load errors can have any.
    pub fn written(&self) -> usize {
        match self {
            Self::Serialization { written, .. } | Self::Write { written, .. } => *written,
            _ => 0,
        }
    }
}
