//! COV CLI - Command line tool for the COVID-19 surveillance extracts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cov-cli",
    version,
    about = "COVID-19 surveillance data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cov_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cov_cmd::run(cli.command).await
}
