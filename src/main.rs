use anyhow::Result;
use clap::Parser;
use satang::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    satang::init_tracing();
    let cli = Cli::parse();
    cli.run().await
}
