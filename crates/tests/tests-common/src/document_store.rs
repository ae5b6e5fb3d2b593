//! A document store holding a fixed list of documents.

use std::sync::Mutex;

use async_trait::async_trait;
use bson::Document;

use query_engine_document::document::DocumentQuery;
use query_engine_execution::document::{DocumentStore, DocumentStoreError};

/// Serves its documents for every query, applying only skip and limit, and records what it was
/// asked. Filters are not evaluated.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: Vec<Document>,
    failure: Option<Failure>,
    queries: Mutex<Vec<DocumentQuery>>,
}

/// Which operation the store should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Find,
    Cursor,
    Count,
}

impl InMemoryDocumentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        InMemoryDocumentStore {
            documents,
            ..InMemoryDocumentStore::default()
        }
    }

    pub fn failing(failure: Failure) -> Self {
        InMemoryDocumentStore {
            failure: Some(failure),
            ..InMemoryDocumentStore::default()
        }
    }

    /// Every query passed to `find`, oldest first.
    pub fn queries(&self) -> Vec<DocumentQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(&self, query: &DocumentQuery) -> Result<Vec<Document>, DocumentStoreError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        match self.failure {
            Some(Failure::Find) => Err(DocumentStoreError::Find("find refused".to_string())),
            Some(Failure::Cursor) => Err(DocumentStoreError::Cursor("cursor closed".to_string())),
            _ => {
                let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
                let limit = usize::try_from(query.limit).unwrap_or(0);
                Ok(self
                    .documents
                    .iter()
                    .skip(skip)
                    .take(limit)
                    .cloned()
                    .collect())
            }
        }
    }

    async fn count(&self, _filter: &Document) -> Result<u64, DocumentStoreError> {
        match self.failure {
            Some(Failure::Count) => Err(DocumentStoreError::Count("count refused".to_string())),
            _ => Ok(u64::try_from(self.documents.len()).unwrap_or(u64::MAX)),
        }
    }
}
