//! Errors for query execution.

use std::time::Duration;

use thiserror::Error;

/// Which backend an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Sql,
    DocumentStore,
}

/// Query execution error. Fetch and count failures are separate variants so a caller can tell
/// which half of a request failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error executing query: {0}")]
    Query(sqlx::Error),
    #[error("the result contains more than one column named '{0}'")]
    DuplicateColumn(String),
    #[error("error decoding column '{column}': {source}")]
    Decoding {
        column: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("error executing count query: {0}")]
    Count(sqlx::Error),
    #[error("error finding documents: {0}")]
    DocumentFind(String),
    #[error("error reading documents: {0}")]
    DocumentCursor(String),
    #[error("query did not finish within {} seconds", .after.as_secs_f64())]
    Timeout { kind: ErrorKind, after: Duration },
    #[error("error counting documents: {0}")]
    DocumentCount(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Query(_) | Error::DuplicateColumn(_) | Error::Decoding { .. } | Error::Count(_) => {
                ErrorKind::Sql
            }
            Error::DocumentFind(_) | Error::DocumentCursor(_) | Error::DocumentCount(_) => {
                ErrorKind::DocumentStore
            }
            Error::Timeout { kind, .. } => *kind,
        }
    }

    /// A stable numeric code.
    pub fn code(&self) -> u32 {
        match self {
            Error::Query(_) => 500_001,
            Error::DuplicateColumn(_) => 500_002,
            Error::Decoding { .. } => 500_003,
            Error::Count(_) => 500_004,
            Error::DocumentFind(_) => 500_005,
            Error::DocumentCursor(_) => 500_006,
            Error::Timeout { .. } => 500_007,
            Error::DocumentCount(_) => 500_008,
        }
    }
}
