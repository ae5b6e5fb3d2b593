//! Database connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::{ConnectionUri, Secret};

pub const DEFAULT_CONNECTION_URI_VARIABLE: &str = "QUERYGATE_CONNECTION_URI";

/// Database connection settings.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConnectionSettings {
    /// Connection string for the database.
    pub connection_uri: ConnectionUri,
    /// Database holding the collection. Only used by the document store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// The table (or collection) every query reads from.
    pub table_name: String,
}

impl DatabaseConnectionSettings {
    pub fn empty() -> Self {
        Self {
            connection_uri: ConnectionUri(Secret::FromEnvironment {
                variable: DEFAULT_CONNECTION_URI_VARIABLE.into(),
            }),
            database_name: None,
            table_name: String::new(),
        }
    }
}
