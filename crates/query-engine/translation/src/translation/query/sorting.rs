//! Translate the sort list into ORDER BY.

use query_engine_metadata::metadata::OrderDirection;
use query_engine_sql::sql;

use crate::translation::validation::SortField;

/// Convert the sort list to an ORDER BY clause, most significant first.
pub(super) fn translate_order_by(sort: &[SortField]) -> sql::ast::OrderBy {
    sql::ast::OrderBy {
        elements: sort
            .iter()
            .map(|field| sql::ast::OrderByElement {
                target: sql::ast::ColumnName(field.identifier.clone()),
                direction: match field.direction {
                    OrderDirection::Asc => sql::ast::OrderByDirection::Asc,
                    OrderDirection::Desc => sql::ast::OrderByDirection::Desc,
                },
            })
            .collect(),
    }
}
