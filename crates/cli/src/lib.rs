//! The `querygate` command line.
//!
//! Writes configuration directories, prints what a request compiles to and runs requests against
//! SQL engines.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Subcommand;

use query_engine_request::QueryRequest;
use query_engine_translation::translation;
use querygate::{CompiledQuery, QueryService};
use querygate_configuration::environment::Environment;
use querygate_configuration::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration, Configuration,
    Engine, ParsedConfiguration,
};

/// The various contextual bits and bobs we need to run.
pub struct Context<Env: Environment, Out: Write> {
    pub environment: Env,
    pub output: Out,
}

/// The command invoked by the user.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a default configuration and its JSON schema into a directory.
    Initialize {
        /// Where to write the configuration.
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// The engine to configure.
        #[arg(long, value_enum, default_value = "sqlite")]
        engine: EngineArg,
        /// The table or collection every query reads from.
        #[arg(long)]
        table: Option<String>,
    },
    /// Print the JSON schema of the configuration file.
    PrintSchema,
    /// Print what a request compiles to for the configured engine.
    Compile {
        #[arg(long, env = "QUERYGATE_CONFIGURATION")]
        configuration: PathBuf,
        /// A file holding the request JSON.
        #[arg(long)]
        request: PathBuf,
    },
    /// Run a request against a SQL engine and print the response.
    Query {
        #[arg(long, env = "QUERYGATE_CONFIGURATION")]
        configuration: PathBuf,
        /// A file holding the request JSON.
        #[arg(long)]
        request: PathBuf,
    },
}

/// Engines as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EngineArg {
    Mongo,
    Sqlite,
    Mysql,
    Postgres,
}

impl From<EngineArg> for Engine {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::Mongo => Engine::Mongo,
            EngineArg::Sqlite => Engine::Sqlite,
            EngineArg::Mysql => Engine::Mysql,
            EngineArg::Postgres => Engine::Postgres,
        }
    }
}

/// Run a command in a given context.
pub async fn run(
    command: Command,
    context: &mut Context<impl Environment, impl Write>,
) -> anyhow::Result<()> {
    match command {
        Command::Initialize {
            output,
            engine,
            table,
        } => initialize(&output, engine.into(), table).await,
        Command::PrintSchema => print_schema(context),
        Command::Compile {
            configuration,
            request,
        } => compile(&configuration, &request, context).await,
        Command::Query {
            configuration,
            request,
        } => query(&configuration, &request, context).await,
    }
}

async fn initialize(output: &Path, engine: Engine, table: Option<String>) -> anyhow::Result<()> {
    let mut parsed = ParsedConfiguration::initial();
    parsed.engine = engine;
    if let Some(table) = table {
        parsed.connection.table_name = table;
    }
    write_parsed_configuration(parsed, output)
        .await
        .with_context(|| format!("writing configuration to {}", output.display()))?;
    Ok(())
}

fn print_schema(context: &mut Context<impl Environment, impl Write>) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(ParsedConfiguration);
    writeln!(context.output, "{}", serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}

async fn compile(
    configuration_dir: &Path,
    request_file: &Path,
    context: &mut Context<impl Environment, impl Write>,
) -> anyhow::Result<()> {
    let configuration = read_configuration(configuration_dir, &context.environment).await?;
    let request = read_request(request_file).await?;

    let validated = translation::validate(&configuration.metadata, &request)?;
    match querygate::explain::compile(&configuration, &validated) {
        CompiledQuery::Sql { query, table } => {
            let data = query.query_sql(&table);
            let count = query.count_sql(&table);
            writeln!(context.output, "{}", pretty_print_sql(&data.sql))?;
            writeln!(context.output)?;
            writeln!(context.output, "{}", pretty_print_sql(&count.sql))?;
            writeln!(context.output)?;
            writeln!(context.output, "{:?}", data.params)?;
        }
        CompiledQuery::Document(query) => {
            writeln!(
                context.output,
                "{}",
                serde_json::to_string_pretty(&query.to_json())?
            )?;
        }
    }
    Ok(())
}

async fn query(
    configuration_dir: &Path,
    request_file: &Path,
    context: &mut Context<impl Environment, impl Write>,
) -> anyhow::Result<()> {
    let configuration = read_configuration(configuration_dir, &context.environment).await?;
    let body = tokio::fs::read_to_string(request_file)
        .await
        .with_context(|| format!("reading {}", request_file.display()))?;

    let mut metrics_registry = prometheus::Registry::new();
    let service = QueryService::create(configuration, None, &mut metrics_registry).await?;

    let output = match service.query_json(&body).await {
        Ok(response) => serde_json::to_value(response)?,
        Err(error) => serde_json::json!({ "error": error.to_response() }),
    };
    writeln!(context.output, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

async fn read_configuration(
    configuration_dir: &Path,
    environment: impl Environment,
) -> anyhow::Result<Configuration> {
    let parsed = parse_configuration(configuration_dir).await?;
    Ok(make_runtime_configuration(parsed, environment)?)
}

async fn read_request(request_file: &Path) -> anyhow::Result<QueryRequest> {
    let body = tokio::fs::read_to_string(request_file)
        .await
        .with_context(|| format!("reading {}", request_file.display()))?;
    serde_json::from_str(&body).with_context(|| format!("parsing {}", request_file.display()))
}

fn pretty_print_sql(query: &str) -> String {
    sqlformat::format(
        query,
        &sqlformat::QueryParams::None,
        sqlformat::FormatOptions::default(),
    )
}
