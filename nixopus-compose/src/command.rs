//! Compose command lines
//!
//! Builds the argument vector for one `docker compose` invocation:
//! `<program> compose -f <file> <subcommand> [-d] [--env-file <file>] [<service>]`

use nixopus_core::{ComposeFilePath, ComposeSubcommand, UpdatePhase};
use std::fmt;

/// Default container tool binary
pub const DEFAULT_PROGRAM: &str = "docker";

/// Service name meaning "every service in the file"
const ALL_SERVICES: &str = "all";

/// One compose invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    pub compose_file: ComposeFilePath,
    pub subcommand: ComposeSubcommand,
    pub detach: bool,
    pub env_file: Option<String>,
    pub service: Option<String>,
}

impl ComposeCommand {
    pub fn new(compose_file: ComposeFilePath, subcommand: ComposeSubcommand) -> Self {
        Self {
            compose_file,
            subcommand,
            detach: false,
            env_file: None,
            service: None,
        }
    }

    /// Command for one phase of the update sequence
    pub fn for_phase(compose_file: ComposeFilePath, phase: UpdatePhase) -> Self {
        Self::new(compose_file, phase.subcommand()).detach(phase.detach())
    }

    pub fn detach(mut self, detach: bool) -> Self {
        self.detach = detach;
        self
    }

    pub fn env_file(mut self, env_file: Option<String>) -> Self {
        self.env_file = env_file.filter(|f| !f.trim().is_empty());
        self
    }

    /// Restricts the command to one service; `all` keeps every service
    pub fn service(mut self, service: Option<String>) -> Self {
        self.service = service.filter(|s| !s.is_empty() && s != ALL_SERVICES);
        self
    }

    /// Arguments passed to the program, starting with `compose`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "compose".to_string(),
            "-f".to_string(),
            self.compose_file.to_string(),
            self.subcommand.as_str().to_string(),
        ];

        if self.detach && self.subcommand.supports_detach() {
            args.push("-d".to_string());
        }

        if let Some(env_file) = &self.env_file {
            args.push("--env-file".to_string());
            args.push(env_file.clone());
        }

        if let Some(service) = &self.service {
            args.push(service.clone());
        }

        args
    }

    /// Full command line for display, e.g. in dry runs
    pub fn display_with(&self, program: &str) -> String {
        let mut parts = vec![program.to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }
}

impl fmt::Display for ComposeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_PROGRAM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose_file() -> ComposeFilePath {
        ComposeFilePath::join("/etc/nixopus", "docker-compose.yml")
    }

    #[test]
    fn test_pull_command() {
        let cmd = ComposeCommand::for_phase(compose_file(), UpdatePhase::Pull);
        assert_eq!(
            cmd.to_string(),
            "docker compose -f /etc/nixopus/docker-compose.yml pull"
        );
    }

    #[test]
    fn test_start_command_is_detached() {
        let cmd = ComposeCommand::for_phase(compose_file(), UpdatePhase::Start);
        assert_eq!(
            cmd.args(),
            vec!["compose", "-f", "/etc/nixopus/docker-compose.yml", "up", "-d"]
        );
    }

    #[test]
    fn test_detach_ignored_for_other_subcommands() {
        let cmd = ComposeCommand::new(compose_file(), ComposeSubcommand::Down).detach(true);
        assert!(!cmd.args().contains(&"-d".to_string()));
    }

    #[test]
    fn test_env_file_and_service() {
        let cmd = ComposeCommand::new(compose_file(), ComposeSubcommand::Restart)
            .env_file(Some("/etc/nixopus/.env".to_string()))
            .service(Some("api".to_string()));

        assert_eq!(
            cmd.display_with("podman"),
            "podman compose -f /etc/nixopus/docker-compose.yml restart \
             --env-file /etc/nixopus/.env api"
        );
    }

    #[test]
    fn test_all_services_and_blank_env_file_are_omitted() {
        let cmd = ComposeCommand::new(compose_file(), ComposeSubcommand::Ps)
            .env_file(Some("  ".to_string()))
            .service(Some("all".to_string()));

        assert_eq!(cmd.env_file, None);
        assert_eq!(cmd.service, None);
        assert_eq!(cmd.args().len(), 4);
    }
}
