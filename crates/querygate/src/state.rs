//! Transient state used by the service.
//!
//! This is initialized on startup.

use std::sync::Arc;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use thiserror::Error;
use tracing::{info_span, Instrument};

use query_engine_execution::document::DocumentStore;
use query_engine_execution::metrics;
use query_engine_translation::translation::SqlCompiler;
use querygate_configuration::{Configuration, Engine};

/// Where compiled queries go.
#[derive(Clone)]
pub enum Backend {
    Sql {
        pool: AnyPool,
        compiler: SqlCompiler,
    },
    Document {
        store: Arc<dyn DocumentStore>,
    },
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Backend::Sql { compiler, .. } => f
                .debug_struct("Sql")
                .field("compiler", compiler)
                .finish_non_exhaustive(),
            Backend::Document { .. } => f.debug_struct("Document").finish_non_exhaustive(),
        }
    }
}

/// State for our service.
#[derive(Debug, Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
    pub backend: Backend,
}

/// Create the backend and wrap it inside a service State.
///
/// SQL engines connect a pool with the configured URI. The document store engine has no driver
/// of its own, so the embedding application hands one in.
pub async fn create_state(
    configuration: &Configuration,
    document_store: Option<Arc<dyn DocumentStore>>,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        Ok(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    let backend = match (configuration.engine.placeholder_style(), document_store) {
        (Some(placeholder_style), None) => Backend::Sql {
            pool: create_pool(configuration)
                .instrument(info_span!("Create connection pool"))
                .await?,
            compiler: SqlCompiler::new(placeholder_style),
        },
        (None, Some(store)) => Backend::Document { store },
        (Some(_), Some(_)) => {
            return Err(InitializationError::UnexpectedDocumentStore(
                configuration.engine,
            ))
        }
        (None, None) => {
            return Err(InitializationError::MissingDocumentStore(
                configuration.engine,
            ))
        }
    };

    Ok(State { metrics, backend })
}

/// Create a connection pool with the configured settings.
/// - <https://docs.rs/sqlx/latest/sqlx/pool/struct.PoolOptions.html>
async fn create_pool(configuration: &Configuration) -> Result<AnyPool, InitializationError> {
    sqlx::any::install_default_drivers();

    let pool_settings = &configuration.pool_settings;

    AnyPoolOptions::new()
        .max_connections(pool_settings.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(pool_settings.pool_timeout))
        .idle_timeout(
            pool_settings
                .idle_timeout
                .map(std::time::Duration::from_secs),
        )
        .max_lifetime(
            pool_settings
                .connection_lifetime
                .map(std::time::Duration::from_secs),
        )
        .connect(&configuration.connection_uri)
        .await
        .map_err(InitializationError::UnableToCreatePool)
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
    #[error("the {0} engine needs a document store")]
    MissingDocumentStore(Engine),
    #[error("a document store was provided but the engine is {0}")]
    UnexpectedDocumentStore(Engine),
}
