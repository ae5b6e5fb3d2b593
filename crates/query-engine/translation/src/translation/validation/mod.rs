//! Check a QueryRequest against the field registry and the toggles, and normalize its pagination.
//!
//! Every step stops at the first failure. Nothing in here touches a backend.

mod fields;
mod pagination;
mod toggles;

use query_engine_metadata::metadata::{Metadata, OrderDirection};
use query_engine_request::{ConditionOperators, Pagination, QueryRequest, Value};

use super::error::Error;

pub use pagination::{clamp, ValidPagination};

/// A request whose client keys have all been resolved to trusted identifiers, that passed every
/// toggle, and whose pagination is within bounds.
///
/// This is the only input the compilers accept.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub search: Vec<SearchField>,
    pub conditions: Vec<ConditionField>,
    pub sort: Vec<SortField>,
    /// Trusted identifiers to return. Empty means every field.
    pub projection: Vec<String>,
    pub pagination: ValidPagination,
    pub total_count: bool,
    pub suppress_data: bool,
}

/// Search terms for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchField {
    pub client_key: String,
    pub identifier: String,
    pub values: Vec<Value>,
}

/// The operators applied to one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionField {
    pub client_key: String,
    pub identifier: String,
    pub operators: ConditionOperators,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub identifier: String,
    pub direction: OrderDirection,
}

/// Resolved fields, pagination still as requested.
#[derive(Debug)]
struct Resolved {
    search: Vec<SearchField>,
    conditions: Vec<ConditionField>,
    sort: Vec<SortField>,
    projection: Vec<String>,
    pagination: Pagination,
    total_count: bool,
    suppress_data: bool,
}

/// Validate a request.
///
/// 1. every referenced field exists in the mapping of its capability, and sort directions are
///    exactly `ASC` or `DESC`;
/// 2. capability toggles, with `DisableTotalCount` clearing the flag instead of failing;
/// 3. operator toggles, then direction toggles;
/// 4. pagination is clamped.
pub fn validate(metadata: &Metadata, request: &QueryRequest) -> Result<ValidatedRequest, Error> {
    let mut resolved = fields::resolve(&metadata.fields_map, request)?;
    toggles::check(&metadata.toggles, &mut resolved)?;
    Ok(ValidatedRequest {
        pagination: clamp(resolved.pagination, &metadata.pagination),
        search: resolved.search,
        conditions: resolved.conditions,
        sort: resolved.sort,
        projection: resolved.projection,
        total_count: resolved.total_count,
        suppress_data: resolved.suppress_data,
    })
}
