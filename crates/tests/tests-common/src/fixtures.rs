//! A `users` table exposed through a small registry.

use std::time::Duration;

use query_engine_metadata::metadata::{FieldRegistry, Metadata, PaginationSettings, Toggles};
use querygate_configuration::{Configuration, Engine, PoolSettings};

pub const USERS_TABLE: &str = "users";

/// The registry every integration test uses.
pub fn users_registry() -> FieldRegistry {
    FieldRegistry {
        search_fields: [("name", "full_name"), ("email", "email")].into(),
        sorting_fields: [("name", "full_name"), ("age", "age")].into(),
        projection_fields: [
            ("id", "id"),
            ("name", "full_name"),
            ("age", "age"),
            ("status", "status"),
        ]
        .into(),
        condition_fields: [
            ("age", "age"),
            ("status", "status"),
            ("createdAt", "created_at"),
        ]
        .into(),
        date_time_field_keys: [("createdAt", "created_at")].into(),
    }
}

pub fn users_metadata(toggles: Toggles) -> Metadata {
    Metadata {
        fields_map: users_registry(),
        toggles,
        pagination: PaginationSettings {
            limit_upper_bound: 3,
        },
    }
}

/// A runtime configuration for the users table.
///
/// In-memory sqlite databases are private to a connection, so the pool holds exactly one and
/// never recycles it.
pub fn users_configuration(engine: Engine, connection_uri: &str, toggles: Toggles) -> Configuration {
    Configuration {
        metadata: users_metadata(toggles),
        engine,
        connection_uri: connection_uri.to_string(),
        database_name: (engine == Engine::Mongo).then(|| "app".to_string()),
        table_name: USERS_TABLE.to_string(),
        pool_settings: PoolSettings {
            max_connections: 1,
            pool_timeout: 5,
            idle_timeout: None,
            connection_lifetime: None,
        },
        print_sql_query: true,
        query_timeout: Duration::from_secs(5),
    }
}
