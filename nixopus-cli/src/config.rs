//! Configuration module
//!
//! Turns command-line settings into the configuration source, resolver and
//! runner used by command handlers.

use anyhow::{Context, Result};
use nixopus_compose::DockerComposeRunner;
use nixopus_core::config::{DEFAULT_COMPOSE_FILE, NIXOPUS_CONFIG_DIR};
use nixopus_core::{ConfigResolver, YamlConfig};
use std::path::PathBuf;
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// YAML configuration file
    pub config_path: PathBuf,

    /// Override for the compose directory
    pub config_dir: Option<String>,

    /// Override for the compose file name
    pub compose_file: Option<String>,

    /// Container tool binary (e.g. docker, podman)
    pub docker_bin: String,
}

impl Config {
    /// Loads the YAML configuration with command-line overrides applied
    ///
    /// A missing file is tolerated only when both compose values are
    /// supplied as overrides.
    pub fn load_source(&self) -> Result<YamlConfig> {
        let fully_overridden = self.config_dir.is_some() && self.compose_file.is_some();

        let mut source = if fully_overridden && !self.config_path.exists() {
            debug!(
                "Config file {:?} not found, using overrides only",
                self.config_path
            );
            YamlConfig::empty()
        } else {
            YamlConfig::load(&self.config_path)
                .with_context(|| format!("Failed to load config from {:?}", self.config_path))?
        };

        if let Some(dir) = &self.config_dir {
            source = source.with_override(NIXOPUS_CONFIG_DIR, dir.clone());
        }
        if let Some(file) = &self.compose_file {
            source = source.with_override(DEFAULT_COMPOSE_FILE, file.clone());
        }

        Ok(source)
    }

    pub fn resolver(&self) -> Result<ConfigResolver<YamlConfig>> {
        Ok(ConfigResolver::new(self.load_source()?))
    }

    pub fn runner(&self) -> DockerComposeRunner {
        DockerComposeRunner::with_program(self.docker_bin.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(path: PathBuf) -> Config {
        Config {
            config_path: path,
            config_dir: None,
            compose_file: None,
            docker_bin: "docker".to_string(),
        }
    }

    #[test]
    fn test_loads_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "nixopus-config-dir: /etc/nixopus\ncompose-file: docker-compose.yml\n",
        )
        .unwrap();

        let resolved = config(path).resolver().unwrap().resolve().unwrap();
        assert_eq!(resolved.as_str(), "/etc/nixopus/docker-compose.yml");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "nixopus-config-dir: /etc/nixopus\ncompose-file: docker-compose.yml\n",
        )
        .unwrap();

        let mut cfg = config(path);
        cfg.compose_file = Some("docker-compose.dev.yml".to_string());

        let resolved = cfg.resolver().unwrap().resolve().unwrap();
        assert_eq!(resolved.as_str(), "/etc/nixopus/docker-compose.dev.yml");
    }

    #[test]
    fn test_missing_file_with_full_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path().join("absent.yaml"));
        cfg.config_dir = Some("/srv/nixopus/".to_string());
        cfg.compose_file = Some("compose.yml".to_string());

        let resolved = cfg.resolver().unwrap().resolve().unwrap();
        assert_eq!(resolved.as_str(), "/srv/nixopus/compose.yml");
    }

    #[test]
    fn test_missing_file_without_overrides_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path().join("absent.yaml"));
        cfg.config_dir = Some("/srv/nixopus".to_string());

        assert!(cfg.load_source().is_err());
    }

    #[test]
    fn test_runner_uses_configured_binary() {
        let mut cfg = config(PathBuf::from("/etc/nixopus/config.yaml"));
        cfg.docker_bin = "podman".to_string();
        assert_eq!(cfg.runner().program(), "podman");
    }
}
