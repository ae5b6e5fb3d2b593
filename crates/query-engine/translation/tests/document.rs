use bson::{doc, Bson, Regex};
use chrono::{TimeZone, Utc};
use query_engine_metadata::metadata::{FieldMapping, FieldRegistry, Metadata};
use query_engine_request::QueryRequest;
use query_engine_translation::translation::{validate, Compiler, DocumentCompiler};
use similar_asserts::assert_eq;

fn metadata() -> Metadata {
    Metadata {
        fields_map: FieldRegistry {
            search_fields: FieldMapping::from([("name", "fullName"), ("email", "email")]),
            sorting_fields: FieldMapping::from([("name", "fullName"), ("age", "age")]),
            projection_fields: FieldMapping::from([("name", "fullName"), ("age", "age")]),
            condition_fields: FieldMapping::from([
                ("age", "age"),
                ("status", "status"),
                ("createdAt", "createdAt"),
            ]),
            date_time_field_keys: FieldMapping::from([("createdAt", "createdAt")]),
        },
        ..Metadata::empty()
    }
}

fn compile(json: &str) -> query_engine_document::document::DocumentQuery {
    let metadata = metadata();
    let request: QueryRequest = serde_json::from_str(json).unwrap();
    let validated = validate(&metadata, &request).unwrap();
    DocumentCompiler.compile(&metadata.fields_map, &validated)
}

fn case_insensitive(pattern: &str) -> Regex {
    Regex {
        pattern: pattern.to_string(),
        options: "i".to_string(),
    }
}

#[test]
fn an_empty_request_matches_everything() {
    let query = compile("{}");

    assert_eq!(query.filter, None);
    assert_eq!(query.projection, None);
    assert_eq!(query.sort, None);
    assert_eq!(query.limit, 50);
    assert_eq!(query.skip, 0);
}

#[test]
fn exact_match_and_greater_or_equal_share_the_top_level_and() {
    let query = compile(
        r#"{
            "conditions": {
                "status": { "valuesToExactMatch": ["active", "pending"] },
                "age": { "greaterOrEqual": 21 }
            }
        }"#,
    );

    assert_eq!(
        query.filter,
        Some(doc! {
            "$and": [
                { "status": { "$in": ["active", "pending"] } },
                { "age": { "$gte": 21_i64 } },
            ]
        })
    );
}

#[test]
fn search_groups_come_before_conditions() {
    let ada = case_insensitive("ada");
    let grace = case_insensitive("grace");
    let example = case_insensitive(r"example\.com");

    let query = compile(
        r#"{
            "search": { "name": ["ada", "grace"], "email": ["example.com"] },
            "conditions": {
                "age": {
                    "greaterThan": 18,
                    "lowerOrEqual": 65,
                    "valuesToExactMatch": [],
                    "valuesToExclude": [30, 40]
                }
            }
        }"#,
    );

    assert_eq!(
        query.filter,
        Some(doc! {
            "$and": [
                { "$or": [ { "fullName": ada }, { "fullName": grace } ] },
                { "$or": [ { "email": example } ] },
                { "age": { "$gt": 18_i64 } },
                { "age": { "$lte": 65_i64 } },
                { "age": { "$nin": [30_i64, 40_i64] } },
            ]
        })
    );
}

#[test]
fn datetime_fields_are_parsed_into_dates() {
    let query = compile(
        r#"{
            "conditions": {
                "createdAt": { "lowerThan": "2024-03-01T10:00:00+02:00", "greaterThan": "yesterday" }
            }
        }"#,
    );

    let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let date = Bson::DateTime(bson::DateTime::from_chrono(timestamp));
    assert_eq!(
        query.filter,
        Some(doc! {
            "$and": [
                { "createdAt": { "$gt": "yesterday" } },
                { "createdAt": { "$lt": date } },
            ]
        })
    );
}

#[test]
fn projection_sort_and_pagination() {
    let query = compile(
        r#"{
            "projectionFields": ["name", "age"],
            "sortConditions": [
                { "field": "age", "sortCondition": "DESC" },
                { "field": "name", "sortCondition": "ASC" }
            ],
            "pagination": { "limit": 10, "offset": 20 }
        }"#,
    );

    assert_eq!(query.projection, Some(doc! { "fullName": 1, "age": 1 }));
    assert_eq!(query.sort, Some(doc! { "age": -1, "fullName": 1 }));
    assert_eq!(query.limit, 10);
    assert_eq!(query.skip, 20);
}
