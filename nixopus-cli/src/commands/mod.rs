//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod service;
mod update;
mod version;

pub use service::ServiceCommands;
pub use update::OutputFormat;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pull the latest images and restart the stack
    Update {
        /// Print the commands that would run without running them
        #[arg(long)]
        dry_run: bool,

        /// Output format for the final result
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Manage compose services
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Show version information
    Version,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Update { dry_run, output } => update::handle_update(config, dry_run, output),
        Commands::Service { command } => service::handle_service_command(command, config),
        Commands::Version => version::print_version(),
    }
}
