//! The compiled SQL shape handed to the execution layer.

use super::ast;
use super::string::{PlaceholderStyle, SQL};

/// A compiled single-table query. Every clause can be rendered on its own, and
/// [`SqlQuery::query_sql`] / [`SqlQuery::count_sql`] combine them into complete statements.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub select_list: ast::SelectList,
    pub where_: ast::Where,
    pub order_by: ast::OrderBy,
    pub limit: ast::Limit,
    pub placeholder_style: PlaceholderStyle,
}

impl SqlQuery {
    fn new_sql(&self) -> SQL {
        SQL::new(self.placeholder_style)
    }

    /// The select list, `*` when no projection was requested.
    pub fn select_clause(&self) -> String {
        let mut sql = self.new_sql();
        self.select_list.to_sql(&mut sql);
        sql.sql
    }

    /// The predicate text and its arguments, in placeholder order. Empty when nothing filters.
    pub fn where_clause(&self) -> SQL {
        let mut sql = self.new_sql();
        self.where_.to_sql(&mut sql);
        sql
    }

    /// `ORDER BY ...`, or an empty string.
    pub fn order_by_clause(&self) -> String {
        let mut sql = self.new_sql();
        self.order_by.to_sql(&mut sql);
        sql.sql
    }

    pub fn limit_clause(&self) -> String {
        let mut sql = self.new_sql();
        self.limit.limit_to_sql(&mut sql);
        sql.sql
    }

    pub fn offset_clause(&self) -> String {
        let mut sql = self.new_sql();
        self.limit.offset_to_sql(&mut sql);
        sql.sql
    }

    /// Extract the data query as SQL.
    pub fn query_sql(&self, table: &ast::TableName) -> SQL {
        let mut sql = self.new_sql();
        sql.append_syntax("SELECT ");
        self.select_list.to_sql(&mut sql);
        self.from_where(table, &mut sql);
        if !self.order_by.elements.is_empty() {
            sql.append_syntax(" ");
            self.order_by.to_sql(&mut sql);
        }
        sql.append_syntax(" ");
        self.limit.to_sql(&mut sql);
        sql
    }

    /// Extract the count query as SQL. Sorting and pagination do not affect a count.
    pub fn count_sql(&self, table: &ast::TableName) -> SQL {
        let mut sql = self.new_sql();
        sql.append_syntax("SELECT COUNT(*)");
        self.from_where(table, &mut sql);
        sql
    }

    fn from_where(&self, table: &ast::TableName, sql: &mut SQL) {
        sql.append_syntax(" FROM ");
        table.to_sql(sql);
        sql.append_syntax(" WHERE 1=1");
        if !self.where_.0.is_empty() {
            sql.append_syntax(" AND ");
            self.where_.to_sql(sql);
        }
    }
}
