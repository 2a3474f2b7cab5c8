use crate::{Config, ConfigError, Result};
use config::{ConfigBuilder, Environment, File};
use std::path::Path;

/// Configuration loader with support for multiple sources.
///
/// Precedence, lowest to highest: hardcoded defaults, configuration files in
/// the order added, environment variables with the `EVENTPIPE` prefix and a
/// double-underscore section separator (e.g.
/// `EVENTPIPE_PIPELINE__WORKER_COUNT=8`, `EVENTPIPE_DATABASE__HOST=db`).
pub struct ConfigLoader {
    builder: ConfigBuilder<config::builder::DefaultState>,
    env_prefix: String,
    files: Vec<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: "EVENTPIPE".to_string(),
            files: Vec::new(),
        }
    }

    /// Add a configuration file
    pub fn with_file(mut self, path: &str) -> Self {
        self.files.push(path.to_string());
        self
    }

    /// Set environment variable prefix
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Load configuration from all sources
    pub fn load(mut self) -> Result<Config> {
        self.builder = self.builder.set_default("database.host", "localhost")?;
        self.builder = self.builder.set_default("database.port", 3306)?;
        self.builder = self.builder.set_default("database.database", "eventdb")?;
        self.builder = self.builder.set_default("database.username", "root")?;
        self.builder = self.builder.set_default("database.password", "testpass")?;
        self.builder = self.builder.set_default("database.max_connections", 20)?;
        self.builder = self.builder.set_default("database.min_connections", 10)?;
        self.builder = self.builder.set_default("pipeline.worker_count", 4)?;
        self.builder = self.builder.set_default("pipeline.queue_size", 1000)?;
        self.builder = self.builder.set_default("pipeline.max_retries", 3)?;
        self.builder = self
            .builder
            .set_default("pipeline.retry_base_backoff_ms", 20)?;
        self.builder = self.builder.set_default("server.host", "0.0.0.0")?;
        self.builder = self.builder.set_default("server.port", 8080)?;
        self.builder = self.builder.set_default("logging.level", "info")?;
        self.builder = self.builder.set_default("logging.format", "json")?;

        for file_path in &self.files {
            if Path::new(file_path).exists() {
                self.builder = self.builder.add_source(File::with_name(file_path));
            } else {
                return Err(ConfigError::file(format!(
                    "configuration file not found: {file_path}"
                )));
            }
        }

        self.builder = self.builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = self.builder.build()?;
        let app_config: Config = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_loader_new() {
        let actual = ConfigLoader::new();
        assert_eq!(actual.env_prefix, "EVENTPIPE");
        assert!(actual.files.is_empty());
    }

    #[test]
    fn test_config_loader_with_file() {
        let fixture = ConfigLoader::new().with_file("config.toml");
        assert_eq!(fixture.files, vec!["config.toml"]);
    }

    #[test]
    fn test_config_loader_load_defaults() {
        let actual = ConfigLoader::new().load();
        assert!(actual.is_ok());

        let config = actual.unwrap();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.pipeline.worker_count, 4);
        assert_eq!(config.pipeline.queue_size, 1000);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_loader_load_with_env() {
        unsafe {
            env::set_var("EPTEST_PIPELINE__WORKER_COUNT", "8");
            env::set_var("EPTEST_DATABASE__HOST", "db.example.com");
        }

        let actual = ConfigLoader::new().with_env_prefix("EPTEST").load();
        assert!(actual.is_ok());

        let config = actual.unwrap();
        assert_eq!(config.pipeline.worker_count, 8);
        assert_eq!(config.database.host, "db.example.com");

        unsafe {
            env::remove_var("EPTEST_PIPELINE__WORKER_COUNT");
            env::remove_var("EPTEST_DATABASE__HOST");
        }
    }

    #[test]
    fn test_config_loader_load_with_file() {
        let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            temp_file,
            r#"
[pipeline]
worker_count = 2
queue_size = 50

[server]
host = "127.0.0.1"
port = 3000
        "#
        )
        .unwrap();

        let actual = ConfigLoader::new()
            .with_file(temp_file.path().to_str().unwrap())
            .load();
        assert!(actual.is_ok());

        let config = actual.unwrap();
        assert_eq!(config.pipeline.worker_count, 2);
        assert_eq!(config.pipeline.queue_size, 50);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_config_loader_load_file_not_found() {
        let actual = ConfigLoader::new().with_file("nonexistent.toml").load();
        assert!(actual.is_err());
    }
}
