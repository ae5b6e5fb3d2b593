use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use querygate_cli::{run, Command, Context};
use querygate_configuration::environment::ProcessEnvironment;

/// Policy-guarded queries over a single table or collection.
#[derive(Parser)]
#[command(name = "querygate", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut context = Context {
        environment: ProcessEnvironment,
        output: std::io::stdout(),
    };
    match run(args.command, &mut context).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
