//! Query execution against a SQL database or a document store.

pub mod document;
pub mod error;
pub mod metrics;
pub mod query;
pub mod sql;
