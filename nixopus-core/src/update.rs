//! Update orchestration
//!
//! Pulls the latest images for the configured compose stack, then restarts
//! the stack in detached mode. The sequence stops at the first failing
//! phase: services are never restarted against a partially pulled image set.
//! Nothing is retried or rolled back.

use crate::config::{ConfigResolver, ConfigSource};
use crate::domain::{ComposeFilePath, PhaseResult, UpdateOutcome, UpdatePhase};
use crate::error::ConfigError;
use crate::log::LogSink;
use crate::runner::ServiceRunner;

const UPDATING: &str = "Updating nixopus";
const PULLING_IMAGES: &str = "Pulling latest images";
const IMAGES_PULLED: &str = "Images pulled successfully";
const STARTING_SERVICES: &str = "Starting services";
const UPDATED: &str = "Nixopus updated successfully";

fn pull_failed(error: &str) -> String {
    format!("Failed to pull images: {}", error)
}

fn start_failed(error: &str) -> String {
    format!("Failed to start services: {}", error)
}

/// Drives the two-phase update against a compose stack
///
/// Generic over its collaborators so tests can substitute a scripted
/// runner and a recording sink.
pub struct UpdateOrchestrator<C: ConfigSource, R: ServiceRunner, S: LogSink> {
    resolver: ConfigResolver<C>,
    runner: R,
    sink: S,
}

impl<C: ConfigSource, R: ServiceRunner, S: LogSink> UpdateOrchestrator<C, R, S> {
    /// Creates a new orchestrator
    ///
    /// # Arguments
    /// * `resolver` - Resolves the compose file once per run
    /// * `runner` - Runs each compose phase
    /// * `sink` - Receives progress and failure messages
    pub fn new(resolver: ConfigResolver<C>, runner: R, sink: S) -> Self {
        Self {
            resolver,
            runner,
            sink,
        }
    }

    /// Runs pull, then start
    ///
    /// # Returns
    /// The terminal outcome, or `ConfigError` if the compose file could not
    /// be resolved (no phase runs in that case)
    pub fn run(&mut self) -> Result<UpdateOutcome, ConfigError> {
        let compose_file = self.resolver.resolve()?;
        self.sink.info(UPDATING);

        self.sink.debug(PULLING_IMAGES);
        let pull = self.run_phase(&compose_file, UpdatePhase::Pull);
        if !pull.success {
            self.sink.error(&pull_failed(&pull.output));
            return Ok(UpdateOutcome::FailedAtPull(pull.output));
        }
        self.sink.debug(IMAGES_PULLED);

        self.sink.debug(STARTING_SERVICES);
        let start = self.run_phase(&compose_file, UpdatePhase::Start);
        if !start.success {
            self.sink.error(&start_failed(&start.output));
            return Ok(UpdateOutcome::FailedAtStart(start.output));
        }

        self.sink.info(UPDATED);
        Ok(UpdateOutcome::Succeeded)
    }

    fn run_phase(&self, compose_file: &ComposeFilePath, phase: UpdatePhase) -> PhaseResult {
        self.runner
            .execute(compose_file, phase.subcommand(), phase.detach())
    }

    /// Consumes the orchestrator, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
