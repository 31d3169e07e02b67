//! persons CLI - run and inspect the persons CRUD server
//!
//! Subcommands:
//! - `serve`: HTTP server with REST listing and GraphQL CRUD
//! - `schema`: print the GraphQL schema (SDL)
//! - `config`: print the effective configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "persons",
    author,
    version,
    about = "GraphQL/REST CRUD server over a single persons table"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: $PERSONS_CONFIG or ~/.persons/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (REST /persons, GraphQL /graphql)
    Serve(commands::serve::ServeArgs),
    /// Print the GraphQL schema definition
    Schema,
    /// Print the effective configuration as TOML (secrets redacted)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, cli.config.as_deref()).await?,
        Commands::Schema => commands::run_schema(),
        Commands::Config => commands::run_config(cli.config.as_deref())?,
    }
    Ok(())
}
