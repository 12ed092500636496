//! Update command handler
//!
//! Wires the YAML configuration, the docker runner and a tracing sink into
//! the core update orchestrator and reports the outcome.

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use nixopus_compose::ComposeCommand;
use nixopus_core::{UpdateError, UpdateOrchestrator, UpdateOutcome, UpdatePhase};

use crate::config::Config;
use crate::sinks::TracingLogSink;

/// How the update result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Handle `nixopus update`
///
/// Returns an error for configuration failures and for failed outcomes,
/// so the process exits non-zero.
pub fn handle_update(config: &Config, dry_run: bool, output: OutputFormat) -> Result<()> {
    if dry_run {
        return print_dry_run(config);
    }

    let mut orchestrator =
        UpdateOrchestrator::new(config.resolver()?, config.runner(), TracingLogSink);
    let outcome = orchestrator.run().map_err(UpdateError::from)?;

    match output {
        OutputFormat::Text => print_outcome(&outcome),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    outcome.into_result()?;
    Ok(())
}

/// Compose command lines an update would run, in order
fn dry_run_commands(config: &Config) -> Result<Vec<String>> {
    let compose_file = config.resolver()?.resolve().map_err(UpdateError::from)?;
    let runner = config.runner();

    Ok(UpdatePhase::SEQUENCE
        .iter()
        .map(|phase| {
            ComposeCommand::for_phase(compose_file.clone(), *phase).display_with(runner.program())
        })
        .collect())
}

fn print_dry_run(config: &Config) -> Result<()> {
    let commands = dry_run_commands(config)?;

    println!("{}", "=== DRY RUN MODE ===".yellow().bold());
    println!("The following commands would be executed:");
    for (index, command) in commands.iter().enumerate() {
        println!("  {}. {}", index + 1, command.cyan());
    }
    println!("{}", "=== END DRY RUN ===".yellow().bold());

    Ok(())
}

fn print_outcome(outcome: &UpdateOutcome) {
    match outcome {
        UpdateOutcome::Succeeded => {
            println!("{}", "✓ Nixopus updated successfully".green().bold());
        }
        UpdateOutcome::FailedAtPull(reason) => {
            println!("{}", "✗ Update failed while pulling images".red().bold());
            println!("  {}", reason.dimmed());
            println!("  Running services were left untouched.");
        }
        UpdateOutcome::FailedAtStart(reason) => {
            println!("{}", "✗ Update failed while starting services".red().bold());
            println!("  {}", reason.dimmed());
        }
    }
}
