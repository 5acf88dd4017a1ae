use clap::Parser;
use sr_cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    sr_cli::run(Cli::parse()).await
}
