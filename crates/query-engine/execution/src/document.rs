//! Execute a compiled document query through a caller supplied store.

use async_trait::async_trait;
use bson::Document;
use thiserror::Error;

use query_engine_document::document::DocumentQuery;

use crate::error::{Error, ErrorKind};
use crate::query::{self, ExecutionOptions, QueryResult};

/// A failure reported by a document store.
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    /// The find operation could not be started.
    #[error("{0}")]
    Find(String),
    /// The find operation started but its results could not be read.
    #[error("{0}")]
    Cursor(String),
    #[error("{0}")]
    Count(String),
}

/// A single collection in a document store.
///
/// The driver is provided by the embedding application. Implementations apply the filter,
/// projection, sort, skip and limit of the query.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document matching the query, in order.
    async fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, DocumentStoreError>;

    /// The number of documents matching a filter.
    async fn count(&self, filter: &Document) -> Result<u64, DocumentStoreError>;
}

/// Execute a query, and its count when requested, against the store.
pub async fn execute(
    store: &dyn DocumentStore,
    query: &DocumentQuery,
    options: &ExecutionOptions,
) -> Result<QueryResult, Error> {
    let filter = query.filter_or_empty();

    let fetch = async {
        let documents = store.find(query).await.map_err(|err| match err {
            DocumentStoreError::Cursor(message) => Error::DocumentCursor(message),
            DocumentStoreError::Find(message) | DocumentStoreError::Count(message) => {
                Error::DocumentFind(message)
            }
        })?;
        Ok::<Vec<query::Row>, Error>(documents.into_iter().map(document_to_json).collect())
    };
    let count = async {
        store
            .count(&filter)
            .await
            .map_err(|err| Error::DocumentCount(err.to_string()))
    };

    query::run(fetch, count, options, ErrorKind::DocumentStore).await
}

/// Convert a document to a row of relaxed extended JSON values.
pub fn document_to_json(document: Document) -> query::Row {
    document
        .into_iter()
        .map(|(key, value)| (key, value.into_relaxed_extjson()))
        .collect()
}
