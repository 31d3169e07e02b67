//! HTTP server command
//!
//! Resolves settings (file, environment, flags), builds the store and runs
//! the server until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use persons_server::db::{create_pool, PgPersonStore};
use persons_server::http::run_server;
use persons_server::{PersonService, Settings, UniquePolicy};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Field checked for duplicates before insert: name, mail or none
    #[arg(long, value_name = "FIELD")]
    pub unique_field: Option<UniquePolicy>,

    /// Keep persons in process memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    /// Apply flags over loaded settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(bind) = self.bind {
            settings.server.bind = bind;
        }
        if self.cors_permissive {
            settings.server.cors_permissive = true;
        }
        if let Some(url) = &self.database_url {
            settings.database.url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            settings.database.max_connections = max;
        }
        if let Some(policy) = self.unique_field {
            settings.persons.unique_field = policy;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: Option<&Path>) -> Result<()> {
    let mut settings = Settings::load(config).context("Failed to load configuration")?;
    args.apply(&mut settings);
    let policy = settings.persons.unique_field;

    let service = if args.in_memory {
        tracing::warn!("Using in-memory store - data is lost on exit");
        PersonService::in_memory(policy)
    } else {
        let pool = create_pool(&settings.database)
            .await
            .context("Failed to create database pool")?;
        PersonService::new(Arc::new(PgPersonStore::new(pool)), policy)
    };

    tracing::info!("Starting persons server on {}", settings.server.bind);

    // Run server (blocks until shutdown)
    run_server(service, &settings.server)
        .await
        .context("Server error")?;

    Ok(())
}
