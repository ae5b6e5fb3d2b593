//! Execute a compiled SQL query through a sqlx `Any` pool.

use chrono::SecondsFormat;
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::AnyPool;
use sqlx::{Column, Row};

use query_engine_sql::sql;
use query_engine_sql::sql::execution_plan::SqlQuery;

use crate::error::{Error, ErrorKind};
use crate::query::{self, ExecutionOptions, QueryResult};

/// Execute a query, and its count when requested, against the given table.
pub async fn execute(
    pool: &AnyPool,
    table: &sql::ast::TableName,
    query: &SqlQuery,
    options: &ExecutionOptions,
) -> Result<QueryResult, Error> {
    let data_sql = query.query_sql(table);
    let count_sql = query.count_sql(table);

    query::run(
        fetch_rows(pool, &data_sql),
        count_rows(pool, &count_sql),
        options,
        ErrorKind::Sql,
    )
    .await
}

async fn fetch_rows(pool: &AnyPool, query: &sql::string::SQL) -> Result<Vec<query::Row>, Error> {
    let rows = build_query_with_params(query)
        .fetch_all(pool)
        .await
        .map_err(Error::Query)?;

    rows.iter().map(row_to_json).collect()
}

async fn count_rows(pool: &AnyPool, query: &sql::string::SQL) -> Result<u64, Error> {
    let row = build_query_with_params(query)
        .fetch_one(pool)
        .await
        .map_err(Error::Count)?;
    let count: i64 = row.try_get(0_usize).map_err(Error::Count)?;

    Ok(u64::try_from(count).unwrap_or(0))
}

/// Create a SQLx query based on our SQL query and bind our parameters to it.
fn build_query_with_params(
    query: &sql::string::SQL,
) -> sqlx::query::Query<'_, sqlx::Any, AnyArguments<'_>> {
    let sqlx_query = sqlx::query(query.sql.as_str());

    query
        .params
        .iter()
        .fold(sqlx_query, |sqlx_query, param| match param {
            sql::ast::Value::Int8(i) => sqlx_query.bind(*i),
            sql::ast::Value::Float8(f) => sqlx_query.bind(*f),
            sql::ast::Value::Bool(b) => sqlx_query.bind(*b),
            sql::ast::Value::String(s) => sqlx_query.bind(s.as_str()),
            // the Any driver has no timestamp type
            sql::ast::Value::Timestamp(timestamp) => {
                sqlx_query.bind(timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            sql::ast::Value::Null => sqlx_query.bind(None::<String>),
        })
}

/// Convert a row to a JSON object keyed by column name.
fn row_to_json(row: &AnyRow) -> Result<query::Row, Error> {
    let mut object = query::Row::new();
    for column in row.columns() {
        let value = decode_column(row, column.ordinal(), column.name())?;
        if object.insert(column.name().to_string(), value).is_some() {
            return Err(Error::DuplicateColumn(column.name().to_string()));
        }
    }
    Ok(object)
}

/// Try the column as each supported type in turn. Nulls decode as the first type.
fn decode_column(row: &AnyRow, index: usize, name: &str) -> Result<serde_json::Value, Error> {
    if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
        return Ok(value.map_or(serde_json::Value::Null, serde_json::Value::from));
    }
    if let Ok(value) = row.try_get::<Option<f64>, _>(index) {
        return Ok(value
            .and_then(serde_json::Number::from_f64)
            .map_or(serde_json::Value::Null, serde_json::Value::Number));
    }
    if let Ok(value) = row.try_get::<Option<bool>, _>(index) {
        return Ok(value.map_or(serde_json::Value::Null, serde_json::Value::Bool));
    }
    if let Ok(value) = row.try_get::<Option<String>, _>(index) {
        return Ok(value.map_or(serde_json::Value::Null, serde_json::Value::String));
    }
    let bytes = row
        .try_get::<Option<Vec<u8>>, _>(index)
        .map_err(|source| Error::Decoding {
            column: name.to_string(),
            source,
        })?;
    Ok(bytes.map_or(serde_json::Value::Null, |bytes| {
        serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
    }))
}
