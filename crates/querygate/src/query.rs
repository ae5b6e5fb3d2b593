//! Run a request end to end.

use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};

use query_engine_execution::query::{ExecutionOptions, QueryResult, Row};
use query_engine_execution::{document, sql};
use query_engine_request::QueryRequest;
use query_engine_translation::translation::{self, Compiler, DocumentCompiler};
use querygate_configuration::Configuration;

use crate::error::Error;
use crate::explain;
use crate::state::{Backend, State};

/// The rows of the requested page, the number of matching rows (0 unless requested) and the
/// number of rows returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub rows: Vec<Row>,
    pub total_count: u64,
    pub size: usize,
}

impl From<QueryResult> for QueryResponse {
    fn from(result: QueryResult) -> Self {
        QueryResponse {
            rows: result.rows,
            total_count: result.total_count,
            size: result.size,
        }
    }
}

/// Execute a query
///
/// Validates the request against the configured registry and toggles, compiles it for the
/// backend in `state` and runs it. Nothing reaches the backend unless validation passed.
/// Failures update the error metrics and are returned to the caller to log.
pub async fn query(
    configuration: &Configuration,
    state: &State,
    query_request: &QueryRequest,
) -> Result<QueryResponse, Error> {
    tracing::debug!("{:?}", query_request);

    let validated = async {
        translation::validate(&configuration.metadata, query_request).map_err(|err| {
            state.metrics.validation_error_total.inc();
            Error::Translation(err)
        })
    }
    .instrument(info_span!("Validate request"))
    .await?;

    let options = ExecutionOptions {
        total_count: validated.total_count,
        suppress_data: validated.suppress_data,
        timeout: configuration.query_timeout,
    };
    let fields = &configuration.metadata.fields_map;

    let result = match &state.backend {
        Backend::Sql { pool, compiler } => {
            let table = configuration.table();
            let plan = async { compiler.compile(fields, &validated) }
                .instrument(info_span!("Compile query"))
                .await;
            if configuration.print_sql_query {
                explain::log_sql(&plan, &table);
            }

            let timer = state.metrics.query_execution_seconds.start_timer();
            let result = sql::execute(pool, &table, &plan, &options)
                .instrument(info_span!("Execute query"))
                .await;
            timer.observe_duration();
            result
        }
        Backend::Document { store } => {
            let plan = async { DocumentCompiler.compile(fields, &validated) }
                .instrument(info_span!("Compile query"))
                .await;
            if configuration.print_sql_query {
                explain::log_document(&plan);
            }

            let timer = state.metrics.query_execution_seconds.start_timer();
            let result = document::execute(store.as_ref(), &plan, &options)
                .instrument(info_span!("Execute query"))
                .await;
            timer.observe_duration();
            result
        }
    };

    let result = result.map_err(|err| {
        state.metrics.execution_error_total.inc();
        Error::Execution(err)
    })?;

    // assuming query succeeded, increment counters
    state.metrics.query_total.inc();
    if validated.total_count {
        state.metrics.total_count_total.inc();
    }

    Ok(QueryResponse::from(result))
}
