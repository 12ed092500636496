//! Compose file and subcommand types

use std::fmt;

/// Location of the compose specification for one run
///
/// Built once from a base directory and a file name and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeFilePath(String);

impl ComposeFilePath {
    /// Joins a directory and a file name with exactly one `/`
    ///
    /// Trailing separators on `dir` and leading separators on `file` are
    /// dropped first. A bare `/` directory yields `/<file>`.
    pub fn join(dir: &str, file: &str) -> Self {
        let dir = dir.trim_end_matches('/');
        let file = file.trim_start_matches('/');
        Self(format!("{}/{}", dir, file))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComposeFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `docker compose` subcommands the CLI knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeSubcommand {
    Pull,
    Up,
    Down,
    Ps,
    Restart,
}

impl ComposeSubcommand {
    /// Token passed on the compose command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ComposeSubcommand::Pull => "pull",
            ComposeSubcommand::Up => "up",
            ComposeSubcommand::Down => "down",
            ComposeSubcommand::Ps => "ps",
            ComposeSubcommand::Restart => "restart",
        }
    }

    /// Whether `-d` is meaningful for this subcommand
    pub fn supports_detach(&self) -> bool {
        matches!(self, ComposeSubcommand::Up)
    }
}

impl fmt::Display for ComposeSubcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
