//! The inbound query description.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use query_engine_metadata::metadata::ConditionOperator;

use crate::value::Value;

/// A query description as sent by a caller.
///
/// Every field name in here is a client key. Nothing in this type has been checked against
/// the field registry yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Search terms per field. The values of one field are OR-ed substring matches.
    #[serde(default)]
    pub search: IndexMap<String, Vec<Value>>,
    /// Fields to return. Empty means all fields.
    #[serde(default)]
    pub projection_fields: Vec<String>,
    /// Sort order, most significant first.
    #[serde(default)]
    pub sort_conditions: Vec<SortInput>,
    /// Conditions per field.
    #[serde(default)]
    pub conditions: IndexMap<String, ConditionOperators>,
    #[serde(default)]
    pub pagination: Pagination,
    /// Also count every matching row, regardless of pagination.
    #[serde(default)]
    pub total_count: bool,
    /// Skip fetching rows entirely.
    #[serde(default)]
    pub suppress_data_response: bool,
}

/// A single sort entry. The direction is kept as sent so validation can reject bad tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortInput {
    pub field: String,
    pub sort_condition: String,
}

/// The operators applied to one field. All present operators must hold.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionOperators {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_or_equal: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_to_exact_match: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_than: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_or_equal: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_to_exclude: Option<Vec<Value>>,
}

impl ConditionOperators {
    /// Whether the slot for an operator is filled. An empty list still counts as present.
    pub fn has(&self, operator: ConditionOperator) -> bool {
        match operator {
            ConditionOperator::GreaterThan => self.greater_than.is_some(),
            ConditionOperator::GreaterOrEqual => self.greater_or_equal.is_some(),
            ConditionOperator::LowerThan => self.lower_than.is_some(),
            ConditionOperator::LowerOrEqual => self.lower_or_equal.is_some(),
            ConditionOperator::ValuesToExclude => self.values_to_exclude.is_some(),
            ConditionOperator::ValuesToExactMatch => self.values_to_exact_match.is_some(),
        }
    }

    /// The operators present on this field.
    pub fn present(&self) -> impl Iterator<Item = ConditionOperator> + '_ {
        enum_iterator::all::<ConditionOperator>().filter(|operator| self.has(*operator))
    }
}

/// Requested page. Not yet clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
