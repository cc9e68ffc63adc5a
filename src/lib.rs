pub mod calendar;
pub mod commands;
pub mod config;
pub mod intake;
pub mod intensity;
pub mod models;
pub mod one_rep_max;
pub mod reps;
pub mod schedule_override;
pub mod week_mapping;

#[cfg(test)]
mod test_utils;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use commands::Cli;
use config::ProgramConfig;

pub fn run() -> anyhow::Result<()> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  let config = ProgramConfig::from_env().context("Failed to load program configuration")?;
  debug!(?config, "configuration loaded");

  let output = commands::execute(&cli.command, &config).map_err(anyhow::Error::msg)?;
  println!("{}", serde_json::to_string_pretty(&output)?);

  info!("done");
  Ok(())
}
