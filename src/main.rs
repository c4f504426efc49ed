use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use snapfeed::config::SnapfeedConfig;
use snapfeed::graphql::{build_schema, run_server};
use snapfeed::logging;

#[derive(Parser)]
#[command(name = "snapfeed")]
#[command(author, version, about = "A GraphQL API backend for a small social feed")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Root directory for the document store (defaults to the working directory)
    #[arg(long, env = "SNAPFEED_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(long, env = "SNAPFEED_CONFIG", default_value = "snapfeed.yml")]
    config: PathBuf,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    verbose: bool,

    /// Write structured logs to this file (daily rotation)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let config = SnapfeedConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let data_root = match cli.data_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve working directory")?,
    };

    let schema = build_schema(config, data_root);

    println!(
        "Starting GraphQL server on http://localhost:{}/graphql",
        cli.port
    );

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, cli.port).await })?;
    Ok(())
}
