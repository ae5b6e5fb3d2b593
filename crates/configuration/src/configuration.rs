//! Configuration for the query service.

use std::time::Duration;

use query_engine_metadata::metadata;
use query_engine_sql::sql::ast::TableName;

use crate::values::PoolSettings;
use crate::version1::Engine;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves every secret. It is built once at startup and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub engine: Engine,
    pub connection_uri: String,
    pub database_name: Option<String>,
    pub table_name: String,
    pub pool_settings: PoolSettings,
    pub print_sql_query: bool,
    pub query_timeout: Duration,
}

impl Configuration {
    pub fn table(&self) -> TableName {
        TableName(self.table_name.clone())
    }
}
