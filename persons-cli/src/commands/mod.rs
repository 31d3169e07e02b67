//! Subcommand implementations

pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use persons_server::Settings;

pub use serve::run_serve;

/// Print the GraphQL SDL
pub fn run_schema() {
    println!("{}", persons_server::graphql::sdl());
}

/// Print the effective configuration with secrets masked
pub fn run_config(config: Option<&Path>) -> Result<()> {
    let settings = Settings::load(config).context("Failed to load configuration")?;

    let toml_str = toml::to_string_pretty(&settings.redacted())
        .context("Failed to serialize config to TOML")?;

    println!("{}", toml_str);
    Ok(())
}
