//! Compose command capability
//!
//! The update sequence never spawns processes itself. It asks a
//! `ServiceRunner` to run one compose subcommand at a time.

use crate::domain::{ComposeFilePath, ComposeSubcommand, PhaseResult};

/// Trait for running compose subcommands
///
/// Implementations block until the underlying process exits. A non-zero
/// exit status or a launch failure is reported as `success == false`;
/// implementations must not panic or return early for either.
pub trait ServiceRunner: Send + Sync {
    /// Run a compose subcommand against a compose file
    ///
    /// # Arguments
    /// * `compose_file` - Compose specification to operate on
    /// * `subcommand` - Subcommand to run (e.g. `pull`, `up`)
    /// * `detach` - Request detached execution where supported
    ///
    /// # Returns
    /// Success flag plus captured output or diagnostic text
    fn execute(
        &self,
        compose_file: &ComposeFilePath,
        subcommand: ComposeSubcommand,
        detach: bool,
    ) -> PhaseResult;
}
