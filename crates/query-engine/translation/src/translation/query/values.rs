//! Handle the translation of literal values.

use bson::Bson;
use query_engine_metadata::metadata::FieldRegistry;
use query_engine_request::Value;
use query_engine_sql::sql;

/// Parse a condition value as a timestamp when its field is registered as a datetime field.
pub fn coerce_condition_value(fields: &FieldRegistry, client_key: &str, value: &Value) -> Value {
    if fields.is_date_time(client_key) {
        value.clone().coerce_timestamp()
    } else {
        value.clone()
    }
}

/// Convert a request value into a SQL value.
pub fn translate_sql_value(value: Value) -> sql::ast::Value {
    match value {
        Value::Null => sql::ast::Value::Null,
        Value::Bool(b) => sql::ast::Value::Bool(b),
        Value::Int(int) => sql::ast::Value::Int8(int),
        Value::Float(float) => sql::ast::Value::Float8(float),
        Value::String(s) => sql::ast::Value::String(s),
        Value::Timestamp(timestamp) => sql::ast::Value::Timestamp(timestamp),
    }
}

/// Convert a request value into a BSON value.
pub fn translate_bson_value(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Int(int) => Bson::Int64(int),
        Value::Float(float) => Bson::Double(float),
        Value::String(s) => Bson::String(s),
        Value::Timestamp(timestamp) => Bson::DateTime(bson::DateTime::from_chrono(timestamp)),
    }
}
