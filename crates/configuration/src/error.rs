//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("unsupported configuration version {version} in {file_path}, expected 1")]
    UnsupportedVersion { file_path: PathBuf, version: u32 },

    #[error("empty table name in {file_path}")]
    EmptyTableName { file_path: PathBuf },

    #[error("pagination.limitUpperBound must be at least 1 in {file_path}")]
    ZeroLimitUpperBound { file_path: PathBuf },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // Sometimes we need to clone the error, and io::Error doesn't implement Clone.
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid configuration in {file_path}: {message}")]
    MissingEnvironmentVariable { file_path: PathBuf, message: String },

    #[error("invalid configuration in {file_path}: the {engine} engine needs a databaseName")]
    MissingDatabaseName { file_path: PathBuf, engine: String },

    #[error("invalid configuration in {file_path}: queryTimeoutSeconds must be positive")]
    ZeroQueryTimeout { file_path: PathBuf },
}
