//! Service command handlers
//!
//! Runs single compose commands (up, down, ps, restart) against the
//! configured compose file.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use colored::*;
use nixopus_compose::ComposeCommand;
use nixopus_core::{ComposeFilePath, ComposeSubcommand};
use std::path::Path;

use crate::config::Config;

/// Which services a command targets
#[derive(Args, Debug, Clone)]
pub struct ServiceTarget {
    /// Name of the service
    #[arg(short, long, default_value = "all")]
    name: String,

    /// Path to an environment file
    #[arg(short, long)]
    env_file: Option<String>,
}

/// Service subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Start services
    Up {
        #[command(flatten)]
        target: ServiceTarget,

        /// Run in the foreground instead of detaching
        #[arg(long)]
        foreground: bool,
    },
    /// Stop and remove services
    Down {
        #[command(flatten)]
        target: ServiceTarget,
    },
    /// Show service status
    Ps {
        #[command(flatten)]
        target: ServiceTarget,
    },
    /// Restart services
    Restart {
        #[command(flatten)]
        target: ServiceTarget,
    },
}

/// Handle service commands
///
/// # Arguments
/// * `command` - The service command to execute
/// * `config` - The CLI configuration
pub fn handle_service_command(command: ServiceCommands, config: &Config) -> Result<()> {
    let compose_file = config.resolver()?.resolve()?;

    let command = match command {
        ServiceCommands::Up { target, foreground } => {
            build_command(compose_file, ComposeSubcommand::Up, target)?.detach(!foreground)
        }
        ServiceCommands::Down { target } => {
            build_command(compose_file, ComposeSubcommand::Down, target)?
        }
        ServiceCommands::Ps { target } => {
            build_command(compose_file, ComposeSubcommand::Ps, target)?
        }
        ServiceCommands::Restart { target } => {
            build_command(compose_file, ComposeSubcommand::Restart, target)?
        }
    };

    let runner = config.runner();
    let result = if command.subcommand.supports_detach() && !command.detach {
        runner.run_attached(&command)
    } else {
        runner.run(&command)
    };
    let services = command.service.as_deref().unwrap_or("all");

    if !result.success {
        println!(
            "{}",
            format!("✗ Service {} failed: {}", command.subcommand, services)
                .red()
                .bold()
        );
        bail!("{}", result.output);
    }

    println!(
        "{}",
        format!("✓ Service {} succeeded: {}", command.subcommand, services).green()
    );
    if !result.output.is_empty() {
        println!("{}", result.output);
    }

    Ok(())
}

fn build_command(
    compose_file: ComposeFilePath,
    subcommand: ComposeSubcommand,
    target: ServiceTarget,
) -> Result<ComposeCommand> {
    let env_file = match target.env_file.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => {
            if !Path::new(path).exists() {
                bail!("Environment file not found: {}", path);
            }
            Some(path.to_string())
        }
        _ => None,
    };

    Ok(ComposeCommand::new(compose_file, subcommand)
        .env_file(env_file)
        .service(Some(target.name)))
}
