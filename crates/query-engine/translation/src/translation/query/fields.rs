//! Translate the projection into a select list.

use query_engine_sql::sql;

/// The requested columns, or `*` when none were requested.
pub(super) fn translate_select_list(projection: &[String]) -> sql::ast::SelectList {
    if projection.is_empty() {
        sql::ast::SelectList::SelectStar
    } else {
        sql::ast::SelectList::SelectList(
            projection
                .iter()
                .map(|identifier| sql::ast::ColumnName(identifier.clone()))
                .collect(),
        )
    }
}
