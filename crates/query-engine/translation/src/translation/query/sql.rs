//! The SQL compiler.

use query_engine_metadata::metadata::FieldRegistry;
use query_engine_sql::sql;
use query_engine_sql::sql::execution_plan::SqlQuery;
use query_engine_sql::sql::string::PlaceholderStyle;

use super::{fields, filtering, sorting, Compiler};
use crate::translation::validation::ValidatedRequest;

/// Compiles requests into parameterized SQL for a single table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlCompiler {
    pub placeholder_style: PlaceholderStyle,
}

impl SqlCompiler {
    pub fn new(placeholder_style: PlaceholderStyle) -> Self {
        SqlCompiler { placeholder_style }
    }
}

impl Compiler for SqlCompiler {
    type Query = SqlQuery;

    fn compile(&self, fields: &FieldRegistry, request: &ValidatedRequest) -> SqlQuery {
        SqlQuery {
            select_list: fields::translate_select_list(&request.projection),
            where_: filtering::translate_where(fields, &request.search, &request.conditions),
            order_by: sorting::translate_order_by(&request.sort),
            limit: sql::ast::Limit {
                limit: request.pagination.limit,
                offset: request.pagination.offset,
            },
            placeholder_style: self.placeholder_style,
        }
    }
}
