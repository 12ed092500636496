//! Configuration lookup
//!
//! Values are read through the `ConfigSource` trait so the resolver can be
//! fed a YAML file in production and a plain map in tests.

use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::ComposeFilePath;
use crate::error::{ConfigError, Result};

/// Key holding the directory that contains the compose file
pub const NIXOPUS_CONFIG_DIR: &str = "nixopus-config-dir";

/// Key holding the compose file name
pub const DEFAULT_COMPOSE_FILE: &str = "compose-file";

/// Default location of the CLI configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/nixopus/config.yaml";

/// Trait for providing configuration values
pub trait ConfigSource: Send + Sync {
    /// Get a value by dotted key
    ///
    /// # Returns
    /// The value rendered as a string, or None if absent
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// YAML-backed configuration with per-key overrides
#[derive(Debug, Clone)]
pub struct YamlConfig {
    root: Value,
    overrides: HashMap<String, String>,
}

impl YamlConfig {
    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses configuration from a YAML string
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let root: Value = serde_yaml::from_str(content)?;
        Ok(Self::from_value(root))
    }

    /// Configuration with no file values, only overrides
    pub fn empty() -> Self {
        Self::from_value(Value::Null)
    }

    fn from_value(root: Value) -> Self {
        Self {
            root,
            overrides: HashMap::new(),
        }
    }

    /// Adds a value that takes precedence over the file
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.as_mapping()?.get(segment))
    }
}

impl ConfigSource for YamlConfig {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.overrides.get(key) {
            return Some(value.clone());
        }

        match self.lookup(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Resolves the compose file path for a run
pub struct ConfigResolver<C: ConfigSource> {
    source: C,
}

impl<C: ConfigSource> ConfigResolver<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    /// Builds the compose file path from the configured directory and name
    ///
    /// Fails with `ConfigError::Missing` if either value is absent or blank.
    pub fn resolve(&self) -> Result<ComposeFilePath> {
        let dir = self.required(NIXOPUS_CONFIG_DIR)?;
        let file = self.required(DEFAULT_COMPOSE_FILE)?;

        if file.trim_start_matches('/').is_empty() {
            return Err(ConfigError::missing(DEFAULT_COMPOSE_FILE));
        }

        Ok(ComposeFilePath::join(&dir, &file))
    }

    fn required(&self, key: &str) -> Result<String> {
        self.source
            .get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::missing(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_joins_dir_and_file() {
        let resolver = ConfigResolver::new(map(&[
            (NIXOPUS_CONFIG_DIR, "/etc/nixopus"),
            (DEFAULT_COMPOSE_FILE, "docker-compose.yml"),
        ]));

        let path = resolver.resolve().unwrap();
        assert_eq!(path.as_str(), "/etc/nixopus/docker-compose.yml");
    }

    #[test]
    fn test_resolve_normalizes_separators() {
        let cases = [
            ("/etc/nixopus/", "docker-compose.yml"),
            ("/etc/nixopus", "/docker-compose.yml"),
            ("/etc/nixopus/", "/docker-compose.yml"),
            (" /etc/nixopus/ ", " docker-compose.yml\n"),
        ];

        for (dir, file) in cases {
            let resolver = ConfigResolver::new(map(&[
                (NIXOPUS_CONFIG_DIR, dir),
                (DEFAULT_COMPOSE_FILE, file),
            ]));
            assert_eq!(
                resolver.resolve().unwrap().as_str(),
                "/etc/nixopus/docker-compose.yml",
                "dir={:?} file={:?}",
                dir,
                file
            );
        }
    }

    #[test]
    fn test_resolve_missing_values() {
        let resolver = ConfigResolver::new(map(&[(DEFAULT_COMPOSE_FILE, "docker-compose.yml")]));
        let err = resolver.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == NIXOPUS_CONFIG_DIR));

        let resolver = ConfigResolver::new(map(&[
            (NIXOPUS_CONFIG_DIR, "/etc/nixopus"),
            (DEFAULT_COMPOSE_FILE, "   "),
        ]));
        let err = resolver.resolve().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref key } if key == DEFAULT_COMPOSE_FILE));

        let resolver = ConfigResolver::new(map(&[
            (NIXOPUS_CONFIG_DIR, "/etc/nixopus"),
            (DEFAULT_COMPOSE_FILE, "/"),
        ]));
        assert!(resolver.resolve().unwrap_err().is_missing());
    }

    #[test]
    fn test_yaml_dotted_lookup() {
        let config = YamlConfig::parse(
            r#"
nixopus-config-dir: /etc/nixopus
compose-file: docker-compose.yml
services:
  api:
    port: 8443
    debug: false
  list: [1, 2]
"#,
        )
        .unwrap();

        assert_eq!(config.get(NIXOPUS_CONFIG_DIR), Some("/etc/nixopus".to_string()));
        assert_eq!(config.get("services.api.port"), Some("8443".to_string()));
        assert_eq!(config.get("services.api.debug"), Some("false".to_string()));
        assert_eq!(config.get("services.api"), None);
        assert_eq!(config.get("services.list"), None);
        assert_eq!(config.get("services.missing"), None);
    }

    #[test]
    fn test_yaml_override_takes_precedence() {
        let config = YamlConfig::parse("compose-file: docker-compose.yml\n")
            .unwrap()
            .with_override(DEFAULT_COMPOSE_FILE, "docker-compose.staging.yml")
            .with_override(NIXOPUS_CONFIG_DIR, "/opt/nixopus");

        let path = ConfigResolver::new(config).resolve().unwrap();
        assert_eq!(path.as_str(), "/opt/nixopus/docker-compose.staging.yml");
    }

    #[test]
    fn test_empty_config_reports_missing() {
        let resolver = ConfigResolver::new(YamlConfig::empty());
        assert!(resolver.resolve().unwrap_err().is_missing());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nixopus-config-dir: /etc/nixopus/").unwrap();
        writeln!(file, "compose-file: docker-compose.yml").unwrap();

        let config = YamlConfig::load(file.path()).unwrap();
        let path = ConfigResolver::new(config).resolve().unwrap();
        assert_eq!(path.as_str(), "/etc/nixopus/docker-compose.yml");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert!(matches!(
            YamlConfig::load(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "key: [unterminated").unwrap();
        assert!(matches!(
            YamlConfig::load(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }
}
