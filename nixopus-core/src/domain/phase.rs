//! Update phases and their results

use super::compose::ComposeSubcommand;

/// One step of the update sequence
///
/// Each phase is bound to a fixed subcommand and fixed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    /// Fetch the latest images
    Pull,
    /// (Re)start services in detached mode
    Start,
}

impl UpdatePhase {
    /// Phases in the order they must run
    pub const SEQUENCE: [UpdatePhase; 2] = [UpdatePhase::Pull, UpdatePhase::Start];

    pub fn subcommand(&self) -> ComposeSubcommand {
        match self {
            UpdatePhase::Pull => ComposeSubcommand::Pull,
            UpdatePhase::Start => ComposeSubcommand::Up,
        }
    }

    pub fn detach(&self) -> bool {
        matches!(self, UpdatePhase::Start)
    }
}

/// Result of running one compose command
///
/// `success == false` means `output` holds a diagnostic; otherwise it is
/// informational and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseResult {
    pub success: bool,
    pub output: String,
}

impl PhaseResult {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}
