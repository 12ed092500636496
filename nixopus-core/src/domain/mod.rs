//! Domain types for compose-driven deployments

pub mod compose;
pub mod outcome;
pub mod phase;

pub use compose::{ComposeFilePath, ComposeSubcommand};
pub use outcome::UpdateOutcome;
pub use phase::{PhaseResult, UpdatePhase};
