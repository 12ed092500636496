//! Nixopus Core
//!
//! Shared domain types and the update sequence for the Nixopus CLI.
//! It includes:
//! - Compose file, phase and outcome types
//! - Configuration lookup and compose path resolution
//! - Capability traits for logging and running compose commands
//! - The pull-then-start update orchestrator

pub mod config;
pub mod domain;
pub mod error;
pub mod log;
pub mod runner;
pub mod update;

pub use config::{ConfigResolver, ConfigSource, YamlConfig};
pub use domain::{ComposeFilePath, ComposeSubcommand, PhaseResult, UpdateOutcome, UpdatePhase};
pub use error::{ConfigError, UpdateError};
pub use log::{LogLevel, LogSink};
pub use runner::ServiceRunner;
pub use update::UpdateOrchestrator;
