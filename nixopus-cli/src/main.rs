//! Nixopus CLI
//!
//! Command-line interface for managing a local Nixopus deployment.

mod commands;
mod config;
mod sinks;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use nixopus_compose::DEFAULT_PROGRAM;
use nixopus_core::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nixopus")]
#[command(about = "Nixopus CLI - deployment and management tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Nixopus configuration file
    #[arg(long, global = true, env = "NIXOPUS_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory holding the compose file (overrides the config file)
    #[arg(long, global = true, env = "NIXOPUS_CONFIG_DIR")]
    config_dir: Option<String>,

    /// Compose file name (overrides the config file)
    #[arg(long, global = true, env = "NIXOPUS_COMPOSE_FILE")]
    compose_file: Option<String>,

    /// Container tool binary used to run compose commands
    #[arg(long, global = true, env = "NIXOPUS_DOCKER_BIN", default_value = DEFAULT_PROGRAM)]
    docker_bin: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose {
        "nixopus=debug,nixopus_core=debug,nixopus_compose=debug"
    } else {
        "nixopus=info,nixopus_core=info,nixopus_compose=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        config_path: cli.config,
        config_dir: cli.config_dir,
        compose_file: cli.compose_file,
        docker_bin: cli.docker_bin,
    };

    handle_command(cli.command, &config)
}
