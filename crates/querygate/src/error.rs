//! Errors surfaced to callers of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use query_engine_execution::error as execution;
use query_engine_translation::translation;

/// Everything a single request can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read the request: {0}")]
    Binding(#[source] serde_json::Error),
    #[error("{0}")]
    Translation(#[from] translation::Error),
    #[error("{0}")]
    Execution(#[from] execution::Error),
}

/// The category of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "BINDING_ERROR")]
    Binding,
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    #[serde(rename = "TOGGLE_ERROR")]
    Toggle,
    #[serde(rename = "SQL_ERROR")]
    Sql,
    #[serde(rename = "DOCUMENT_STORE_ERROR")]
    DocumentStore,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Binding(_) => ErrorKind::Binding,
            Error::Translation(err) => match err.kind() {
                translation::ErrorKind::Validation => ErrorKind::Validation,
                translation::ErrorKind::Toggle => ErrorKind::Toggle,
            },
            Error::Execution(err) => match err.kind() {
                execution::ErrorKind::Sql => ErrorKind::Sql,
                execution::ErrorKind::DocumentStore => ErrorKind::DocumentStore,
            },
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Error::Binding(_) => 400_000,
            Error::Translation(err) => err.code(),
            Error::Execution(err) => err.code(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            kind: self.kind(),
            message: self.to_string(),
            code: self.code(),
        }
    }
}

/// The structured error returned alongside a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
    pub code: u32,
}
