//! Resolve client keys through the field registry.

use std::collections::HashSet;

use query_engine_metadata::metadata::{Capability, FieldRegistry, OrderDirection};
use query_engine_request::{QueryRequest, SortInput};

use super::{ConditionField, Resolved, SearchField, SortField};
use crate::translation::error::Error;

/// Look up every referenced field. Search is checked first, then conditions, sort and projection.
pub(super) fn resolve(fields: &FieldRegistry, request: &QueryRequest) -> Result<Resolved, Error> {
    let search = request
        .search
        .iter()
        .map(|(client_key, values)| {
            let identifier = fields
                .resolve(Capability::Search, client_key)
                .ok_or_else(|| Error::FieldNotSearchable(client_key.clone()))?;
            Ok(SearchField {
                client_key: client_key.clone(),
                identifier: identifier.to_string(),
                values: values.clone(),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let conditions = request
        .conditions
        .iter()
        .map(|(client_key, operators)| {
            let identifier = fields
                .resolve(Capability::Condition, client_key)
                .ok_or_else(|| Error::FieldNotConditionable(client_key.clone()))?;
            Ok(ConditionField {
                client_key: client_key.clone(),
                identifier: identifier.to_string(),
                operators: operators.clone(),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let sort = request
        .sort_conditions
        .iter()
        .map(|input| {
            let identifier = fields
                .resolve(Capability::Sorting, &input.field)
                .ok_or_else(|| Error::FieldNotSortable(input.field.clone()))?;
            let direction = OrderDirection::parse(&input.sort_condition).ok_or_else(|| {
                Error::InvalidSortDirection {
                    field: input.field.clone(),
                    direction: input.sort_condition.clone(),
                }
            })?;
            Ok(SortField {
                identifier: identifier.to_string(),
                direction,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    if let Some(duplicate) = first_repeated_sort(&request.sort_conditions, &sort) {
        return Err(Error::DuplicateSortField(duplicate.to_string()));
    }

    let projection = request
        .projection_fields
        .iter()
        .map(|client_key| {
            fields
                .resolve(Capability::Projection, client_key)
                .map(ToString::to_string)
                .ok_or_else(|| Error::FieldNotProjectable(client_key.clone()))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(Resolved {
        search,
        conditions,
        sort,
        projection,
        pagination: request.pagination,
        total_count: request.total_count,
        suppress_data: request.suppress_data_response,
    })
}

/// The client key of the first sort entry whose identifier is already sorted on. Two client
/// keys can map to the same identifier.
fn first_repeated_sort<'a>(inputs: &'a [SortInput], resolved: &[SortField]) -> Option<&'a str> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .zip(resolved)
        .find(|(_, field)| !seen.insert(field.identifier.as_str()))
        .map(|(input, _)| input.field.as_str())
}
