//! Convert a parsed configuration into the runtime one.

use std::path::PathBuf;
use std::time::Duration;

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ConnectionUri, Secret};
use crate::version1::{Engine, ParsedConfiguration, CONFIGURATION_FILENAME};

/// Convert the parsed configuration metadata to internal engine metadata
/// That can be used by the translation and execution crates.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let connection_uri = match &parsed_config.connection.connection_uri {
        ConnectionUri(Secret::Plain(uri)) => uri.clone(),
        ConnectionUri(Secret::FromEnvironment { variable }) => {
            environment.read(variable).map_err(|error| {
                MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                    file_path: PathBuf::from(CONFIGURATION_FILENAME),
                    message: error.to_string(),
                }
            })?
        }
    };

    if parsed_config.engine == Engine::Mongo && parsed_config.connection.database_name.is_none() {
        return Err(MakeRuntimeConfigurationError::MissingDatabaseName {
            file_path: PathBuf::from(CONFIGURATION_FILENAME),
            engine: parsed_config.engine.to_string(),
        });
    }

    if parsed_config.query_timeout_seconds == 0 {
        return Err(MakeRuntimeConfigurationError::ZeroQueryTimeout {
            file_path: PathBuf::from(CONFIGURATION_FILENAME),
        });
    }

    let metadata = parsed_config.metadata();

    Ok(Configuration {
        metadata,
        engine: parsed_config.engine,
        connection_uri,
        database_name: parsed_config.connection.database_name,
        table_name: parsed_config.connection.table_name,
        pool_settings: parsed_config.pool_settings,
        print_sql_query: parsed_config.print_sql_query,
        query_timeout: Duration::from_secs(parsed_config.query_timeout_seconds),
    })
}
