//! The document-store compiler.

use bson::{Bson, Document};
use query_engine_document::document::query::{
    case_insensitive_regex, combine, comparison, include_fields,
};
use query_engine_document::document::{ComparisonOperator, DocumentQuery, LogicalOperator};
use query_engine_metadata::metadata::{FieldRegistry, OrderDirection};
use query_engine_request::Value;

use super::{values, Compiler};
use crate::translation::validation::{ConditionField, SearchField, SortField, ValidatedRequest};

/// Compiles requests into filter, projection and sort documents for a single collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentCompiler;

impl Compiler for DocumentCompiler {
    type Query = DocumentQuery;

    fn compile(&self, fields: &FieldRegistry, request: &ValidatedRequest) -> DocumentQuery {
        DocumentQuery {
            filter: translate_filter(fields, &request.search, &request.conditions),
            projection: translate_projection(&request.projection),
            sort: translate_sort(&request.sort),
            limit: i64::from(request.pagination.limit),
            skip: u64::from(request.pagination.offset),
        }
    }
}

/// A top-level `$and` holding one `$or` per search field followed by one clause per condition
/// operator. `None` when nothing filters.
fn translate_filter(
    fields: &FieldRegistry,
    search: &[SearchField],
    conditions: &[ConditionField],
) -> Option<Document> {
    let mut clauses: Vec<Document> = search
        .iter()
        .filter(|field| !field.values.is_empty())
        .map(translate_search)
        .collect();

    for condition in conditions {
        clauses.extend(translate_condition(fields, condition));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(combine(LogicalOperator::And, clauses))
    }
}

/// Values are matched as case-insensitive substrings, so regex syntax in them is escaped.
fn translate_search(field: &SearchField) -> Document {
    combine(
        LogicalOperator::Or,
        field
            .values
            .iter()
            .map(|value| {
                case_insensitive_regex(&field.identifier, regex::escape(&value.to_string()))
            })
            .collect(),
    )
}

fn translate_condition(fields: &FieldRegistry, condition: &ConditionField) -> Vec<Document> {
    let coerce = |value: &Value| {
        values::translate_bson_value(values::coerce_condition_value(
            fields,
            &condition.client_key,
            value,
        ))
    };
    let identifier = condition.identifier.as_str();
    let operators = &condition.operators;

    let single = |value: &Option<Value>, operator: ComparisonOperator| {
        value
            .as_ref()
            .map(|value| comparison(identifier, operator, coerce(value)))
    };
    let list = |values: &Option<Vec<Value>>, operator: ComparisonOperator| {
        values
            .as_ref()
            .filter(|values| !values.is_empty())
            .map(|values| {
                comparison(
                    identifier,
                    operator,
                    Bson::Array(values.iter().map(coerce).collect()),
                )
            })
    };

    [
        list(&operators.values_to_exact_match, ComparisonOperator::In),
        single(
            &operators.greater_or_equal,
            ComparisonOperator::GreaterThanOrEqualTo,
        ),
        single(&operators.greater_than, ComparisonOperator::GreaterThan),
        single(
            &operators.lower_or_equal,
            ComparisonOperator::LessThanOrEqualTo,
        ),
        single(&operators.lower_than, ComparisonOperator::LessThan),
        list(&operators.values_to_exclude, ComparisonOperator::NotIn),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn translate_projection(projection: &[String]) -> Option<Document> {
    if projection.is_empty() {
        None
    } else {
        Some(include_fields(projection.iter().map(String::as_str)))
    }
}

fn translate_sort(sort: &[SortField]) -> Option<Document> {
    if sort.is_empty() {
        return None;
    }
    let mut document = Document::new();
    for field in sort {
        let direction = match field.direction {
            OrderDirection::Asc => 1_i32,
            OrderDirection::Desc => -1_i32,
        };
        document.insert(field.identifier.clone(), direction);
    }
    Some(document)
}
