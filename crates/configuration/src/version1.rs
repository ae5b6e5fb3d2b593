//! Configuration format version 1.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use query_engine_metadata::metadata;
use query_engine_sql::sql::string::PlaceholderStyle;

use crate::connection_settings::DatabaseConnectionSettings;
use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::PoolSettings;

const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";
pub const DEFAULT_QUERY_TIMEOUT_SECONDS: u64 = 10;
const INITIAL_TABLE_NAME: &str = "records";

/// The backend queries are compiled for and run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Mongo,
    Sqlite,
    Mysql,
    Postgres,
}

impl Engine {
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Mongo => "mongo",
            Engine::Sqlite => "sqlite",
            Engine::Mysql => "mysql",
            Engine::Postgres => "postgres",
        }
    }

    /// The placeholder style of a SQL engine, or `None` for the document store.
    pub fn placeholder_style(&self) -> Option<PlaceholderStyle> {
        match self {
            Engine::Mongo => None,
            Engine::Postgres => Some(PlaceholderStyle::Numbered),
            Engine::Sqlite | Engine::Mysql => Some(PlaceholderStyle::QuestionMark),
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Initial configuration, just enough to connect to a database and elaborate a full
/// 'Configuration'.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: u32,
    pub engine: Engine,
    pub connection: DatabaseConnectionSettings,
    #[serde(skip_serializing_if = "PoolSettings::is_default")]
    #[serde(default)]
    pub pool_settings: PoolSettings,
    #[serde(default)]
    pub toggles: metadata::Toggles,
    #[serde(default)]
    pub fields_map: metadata::FieldRegistry,
    #[serde(default)]
    pub pagination: metadata::PaginationSettings,
    /// Log every compiled query together with its arguments.
    #[serde(default)]
    pub print_sql_query: bool,
    /// Bound on the combined data fetch and count of one request.
    #[serde(default = "query_timeout_seconds_default")]
    pub query_timeout_seconds: u64,
}

fn query_timeout_seconds_default() -> u64 {
    DEFAULT_QUERY_TIMEOUT_SECONDS
}

impl ParsedConfiguration {
    /// What `querygate initialize` writes: a sqlite table named `records`, connected through the
    /// default environment variable, exposing no fields.
    pub fn initial() -> Self {
        let mut configuration = ParsedConfiguration::empty();
        configuration.connection.table_name = INITIAL_TABLE_NAME.to_string();
        configuration
    }

    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            engine: Engine::Sqlite,
            connection: DatabaseConnectionSettings::empty(),
            pool_settings: PoolSettings::default(),
            toggles: metadata::Toggles::default(),
            fields_map: metadata::FieldRegistry::empty(),
            pagination: metadata::PaginationSettings::default(),
            print_sql_query: false,
            query_timeout_seconds: DEFAULT_QUERY_TIMEOUT_SECONDS,
        }
    }

    pub fn metadata(&self) -> metadata::Metadata {
        metadata::Metadata {
            fields_map: self.fields_map.clone(),
            toggles: self.toggles.clone(),
            pagination: self.pagination.clone(),
        }
    }
}

/// Read the configuration file out of a directory and check it.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion {
            file_path: configuration_file,
            version: parsed_config.version,
        });
    }

    if parsed_config.connection.table_name.trim().is_empty() {
        return Err(ParseConfigurationError::EmptyTableName {
            file_path: configuration_file,
        });
    }

    if parsed_config.pagination.limit_upper_bound == 0 {
        return Err(ParseConfigurationError::ZeroLimitUpperBound {
            file_path: configuration_file,
        });
    }

    Ok(parsed_config)
}

/// Write the parsed configuration, and the JSON schema describing it, into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engines_pick_their_placeholder_style() {
        assert_eq!(
            Engine::Postgres.placeholder_style(),
            Some(PlaceholderStyle::Numbered)
        );
        assert_eq!(
            Engine::Mysql.placeholder_style(),
            Some(PlaceholderStyle::QuestionMark)
        );
        assert_eq!(
            Engine::Sqlite.placeholder_style(),
            Some(PlaceholderStyle::QuestionMark)
        );
        assert_eq!(Engine::Mongo.placeholder_style(), None);
    }

    #[test]
    fn defaults_fill_in_optional_settings() {
        let parsed: ParsedConfiguration = serde_json::from_value(serde_json::json!({
            "version": 1,
            "engine": "postgres",
            "connection": {
                "connectionUri": { "variable": "DATABASE_URL" },
                "tableName": "users"
            }
        }))
        .unwrap();

        assert_eq!(parsed.pool_settings, PoolSettings::default());
        assert_eq!(parsed.pagination.limit_upper_bound, 50);
        assert!(!parsed.print_sql_query);
        assert_eq!(parsed.query_timeout_seconds, 10);
        assert!(parsed.fields_map.search_fields.is_empty());
    }
}
