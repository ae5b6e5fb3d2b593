//! Requests run end to end against an in-memory document store.

use std::sync::Arc;

use bson::{doc, Regex};
use serde_json::json;
use similar_asserts::assert_eq;

use query_engine_execution::document::DocumentStore;
use query_engine_metadata::metadata::Toggles;
use querygate::{ErrorKind, InitializationError, QueryService};
use querygate_configuration::Engine;
use tests_common::document_store::{Failure, InMemoryDocumentStore};
use tests_common::fixtures::users_configuration;

fn users() -> Vec<bson::Document> {
    vec![
        doc! { "id": 1_i64, "full_name": "Ada Lovelace", "age": 36_i32 },
        doc! { "id": 2_i64, "full_name": "Grace Hopper", "age": 85_i32 },
        doc! { "id": 3_i64, "full_name": "Alan Turing", "age": 41_i32 },
        doc! { "id": 4_i64, "full_name": "Edsger Dijkstra", "age": 72_i32 },
    ]
}

async fn service_with(store: Arc<InMemoryDocumentStore>) -> QueryService {
    tests_common::init_logging();
    let configuration = users_configuration(Engine::Mongo, "mongodb://unused", Toggles::default());
    let mut registry = prometheus::Registry::new();
    QueryService::create(
        configuration,
        Some(store as Arc<dyn DocumentStore>),
        &mut registry,
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn compiles_the_request_into_store_documents() {
    let store = Arc::new(InMemoryDocumentStore::new(users()));
    let service = service_with(store.clone()).await;

    let response = service
        .query_json(
            r#"{
                "search": { "name": ["a.b"] },
                "conditions": { "age": { "greaterOrEqual": 40, "valuesToExclude": [72] } },
                "sortConditions": [ { "field": "age", "sortCondition": "DESC" } ],
                "projectionFields": ["name", "age"],
                "pagination": { "limit": 2, "offset": 1 },
                "totalCount": true
            }"#,
        )
        .await
        .unwrap();

    let queries = store.queries();
    assert_eq!(queries.len(), 1);

    let pattern = Regex {
        pattern: "a\\.b".to_string(),
        options: "i".to_string(),
    };
    assert_eq!(
        queries[0].filter,
        Some(doc! {
            "$and": [
                { "$or": [ { "full_name": pattern } ] },
                { "age": { "$gte": 40_i64 } },
                { "age": { "$nin": [72_i64] } },
            ]
        })
    );
    assert_eq!(queries[0].projection, Some(doc! { "full_name": 1, "age": 1 }));
    assert_eq!(queries[0].sort, Some(doc! { "age": -1 }));
    assert_eq!((queries[0].limit, queries[0].skip), (2, 1));

    // the fake store ignores filters, only skip and limit apply
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "rows": [
                { "id": 2, "full_name": "Grace Hopper", "age": 85 },
                { "id": 3, "full_name": "Alan Turing", "age": 41 },
            ],
            "totalCount": 4,
            "size": 2,
        })
    );
}

#[tokio::test]
async fn validation_happens_before_the_store_is_touched() {
    let store = Arc::new(InMemoryDocumentStore::new(users()));
    let service = service_with(store.clone()).await;

    let error = service
        .query_json(r#"{ "projectionFields": ["password"] }"#)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.code(), 400_003);
    assert!(store.queries().is_empty());
}

#[tokio::test]
async fn store_failures_keep_their_codes() {
    for (failure, code) in [
        (Failure::Find, 500_005),
        (Failure::Cursor, 500_006),
        (Failure::Count, 500_008),
    ] {
        let service = service_with(Arc::new(InMemoryDocumentStore::failing(failure))).await;

        let error = service
            .query_json(r#"{ "totalCount": true }"#)
            .await
            .unwrap_err()
            .to_response();

        assert_eq!(error.kind, ErrorKind::DocumentStore);
        assert_eq!(error.code, code);
    }
}

#[tokio::test]
async fn the_document_engine_needs_a_store() {
    let configuration = users_configuration(Engine::Mongo, "mongodb://unused", Toggles::default());
    let mut registry = prometheus::Registry::new();

    let result = QueryService::create(configuration, None, &mut registry).await;

    assert!(matches!(
        result,
        Err(InitializationError::MissingDocumentStore(Engine::Mongo))
    ));
}

#[tokio::test]
async fn sql_engines_refuse_a_store() {
    let configuration = users_configuration(Engine::Sqlite, "sqlite::memory:", Toggles::default());
    let mut registry = prometheus::Registry::new();
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new(vec![]));

    let result = QueryService::create(configuration, Some(store), &mut registry).await;

    assert!(matches!(
        result,
        Err(InitializationError::UnexpectedDocumentStore(Engine::Sqlite))
    ));
}
