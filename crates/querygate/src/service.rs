//! The entry point embedding applications talk to.

use std::sync::Arc;

use query_engine_execution::document::DocumentStore;
use query_engine_request::QueryRequest;
use query_engine_translation::translation::{self, ValidatedRequest};
use querygate_configuration::Configuration;

use crate::error::Error;
use crate::explain::{self, CompiledQuery};
use crate::query::{self, QueryResponse};
use crate::state::{self, InitializationError, State};

/// Configuration and state for one table or collection, built once at startup.
#[derive(Debug, Clone)]
pub struct QueryService {
    configuration: Configuration,
    state: State,
}

impl QueryService {
    pub fn new(configuration: Configuration, state: State) -> Self {
        QueryService {
            configuration,
            state,
        }
    }

    /// Create the state for a configuration and wrap both in a service.
    pub async fn create(
        configuration: Configuration,
        document_store: Option<Arc<dyn DocumentStore>>,
        metrics_registry: &mut prometheus::Registry,
    ) -> Result<Self, InitializationError> {
        let state = state::create_state(&configuration, document_store, metrics_registry)
            .await
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "querygate",
                    event.name = "Initialization error",
                    name = "Initialization error",
                    body = %err,
                    error = true,
                );
                err
            })?;
        Ok(QueryService::new(configuration, state))
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Read a request from its JSON form.
    pub fn get_json(&self, body: &str) -> Result<QueryRequest, Error> {
        serde_json::from_str(body).map_err(Error::Binding)
    }

    /// Validate a request without compiling or running it.
    pub fn validate(&self, request: &QueryRequest) -> Result<ValidatedRequest, Error> {
        Ok(translation::validate(&self.configuration.metadata, request)?)
    }

    /// Validate and compile a request without running it.
    pub fn compile(&self, request: &QueryRequest) -> Result<CompiledQuery, Error> {
        let validated = self.validate(request)?;
        Ok(explain::compile(&self.configuration, &validated))
    }

    /// Validate, compile and run a request.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, Error> {
        query::query(&self.configuration, &self.state, request)
            .await
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "querygate",
                    event.name = "Query error",
                    name = "Query error",
                    body = %err,
                    code = err.code(),
                    error = true,
                );
                err
            })
    }

    /// Run a request given in its JSON form.
    pub async fn query_json(&self, body: &str) -> Result<QueryResponse, Error> {
        let request = self.get_json(body).map_err(|err| {
            tracing::error!(
                meta.signal_type = "log",
                event.domain = "querygate",
                event.name = "Binding error",
                name = "Binding error",
                body = %err,
                error = true,
            );
            err
        })?;
        self.query(&request).await
    }
}
