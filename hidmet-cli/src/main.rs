use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hidmet_cli::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    cli::run(Cli::parse()).await
}
