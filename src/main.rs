use std::process::ExitCode;

use clap::Parser;
use namer::cli::{Cli, CommandOutput, Commands};
use namer::error::NamerError;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "NAMER_LOG";

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(%error, "command failed");
            let serialized = serde_json::to_string_pretty(&error.to_error_response()).unwrap_or_else(
                |_| {
                    "{\"error\":{\"type\":\"serialization_error\",\"message\":\"Failed to serialize error response\"}}"
                        .to_string()
                },
            );
            println!("{serialized}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<String, NamerError> {
    let cli = Cli::parse();
    tracing::debug!(version = namer::version(), command = ?cli.command, "starting");

    match cli.command {
        Commands::Compose(args) => render(namer::cli::compose::run_compose(args)?),
        Commands::Limit(args) => render(namer::cli::limit::run_limit(args)),
        Commands::Digest(args) => render(namer::cli::digest::run_digest(args)),
        Commands::Batch(args) => {
            let response = namer::cli::batch::run_batch(args)?;
            to_json(&response)
        }
    }
}

fn render<T: Serialize>(output: CommandOutput<T>) -> Result<String, NamerError> {
    match output {
        CommandOutput::Text(text) => Ok(text),
        CommandOutput::Json(response) => to_json(&response),
    }
}

fn to_json<T: Serialize>(response: &T) -> Result<String, NamerError> {
    serde_json::to_string_pretty(response)
        .map_err(|source| NamerError::ResponseSerialization { source })
}
