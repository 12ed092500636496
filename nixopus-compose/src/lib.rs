//! Nixopus Compose
//!
//! Runs `docker compose` for the Nixopus CLI:
//! - Rendering compose command lines
//! - Executing them and capturing their output
//! - Implementing the core `ServiceRunner` capability

pub mod command;
pub mod docker;

pub use command::{ComposeCommand, DEFAULT_PROGRAM};
pub use docker::DockerComposeRunner;
