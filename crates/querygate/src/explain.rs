//! Compile a request without running it.

use std::collections::BTreeMap;

use query_engine_document::document::DocumentQuery;
use query_engine_sql::sql;
use query_engine_sql::sql::execution_plan::SqlQuery;
use query_engine_translation::translation::{
    Compiler, DocumentCompiler, SqlCompiler, ValidatedRequest,
};
use querygate_configuration::Configuration;

/// A request compiled for the configured engine.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledQuery {
    Sql {
        query: SqlQuery,
        table: sql::ast::TableName,
    },
    Document(DocumentQuery),
}

/// Compile a validated request for the engine named in the configuration.
pub fn compile(configuration: &Configuration, request: &ValidatedRequest) -> CompiledQuery {
    let fields = &configuration.metadata.fields_map;
    match configuration.engine.placeholder_style() {
        Some(placeholder_style) => CompiledQuery::Sql {
            query: SqlCompiler::new(placeholder_style).compile(fields, request),
            table: configuration.table(),
        },
        None => CompiledQuery::Document(DocumentCompiler.compile(fields, request)),
    }
}

impl CompiledQuery {
    /// Human readable parts of the compiled query, keyed by what they are.
    pub fn details(&self) -> BTreeMap<String, String> {
        match self {
            CompiledQuery::Sql { query, table } => {
                let data = query.query_sql(table);
                let count = query.count_sql(table);
                BTreeMap::from_iter([
                    ("SQL Query".into(), data.sql),
                    ("Count Query".into(), count.sql),
                    ("Parameters".into(), format!("{:?}", data.params)),
                ])
            }
            CompiledQuery::Document(query) => {
                let json = query.to_json();
                ["filter", "projection", "sort", "limit", "skip"]
                    .into_iter()
                    .map(|key| (key.to_string(), json[key].to_string()))
                    .collect()
            }
        }
    }
}

pub(crate) fn log_sql(query: &SqlQuery, table: &sql::ast::TableName) {
    let data = query.query_sql(table);
    tracing::info!(generated_sql = %data.sql, params = ?data.params);
}

pub(crate) fn log_document(query: &DocumentQuery) {
    let json = query.to_json();
    tracing::info!(
        filter = %json["filter"],
        sort = %json["sort"],
        projection = %json["projection"],
        limit = query.limit,
        skip = query.skip,
    );
}
