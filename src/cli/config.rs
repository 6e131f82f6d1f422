//! Configuration file
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 5000,
//!   "cors_origins": [],
//!   "data_dir": "data",
//!   "data_file": "submissions.json"
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::ConfigArgs;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::store::DEFAULT_DATA_FILE;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (default "data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Data file name inside `data_dir` (default "submissions.json")
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            data_file: default_data_file(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file; a missing file yields defaults
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the file named by `args` and apply its overrides
    pub fn from_args(args: &ConfigArgs) -> CliResult<Self> {
        let mut config = Self::load(&args.config)?;
        if let Some(dir) = &args.data_dir {
            config.data_dir = dir.clone();
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        // The data file must sit directly inside data_dir so the temp file can be renamed over it
        if Path::new(&self.data_file).components().count() != 1 {
            return Err(CliError::config_error(format!(
                "data_file must be a plain file name, got '{}'",
                self.data_file
            )));
        }

        Ok(())
    }

    /// Full path of the data file
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("absent.json")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.data_path(), PathBuf::from("data/submissions.json"));
    }

    #[test]
    fn test_flattened_server_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("collector.json");
        fs::write(
            &path,
            r#"{"port": 8081, "host": "127.0.0.1", "data_dir": "/var/lib/collector"}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:8081");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/collector"));
        assert_eq!(config.data_file, DEFAULT_DATA_FILE);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("collector.json");
        fs::write(&path, "{port:").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("collector.json");

        fs::write(&path, r#"{"port": 0}"#).unwrap();
        assert!(Config::load(&path).is_err());

        fs::write(&path, r#"{"data_file": "nested/file.json"}"#).unwrap();
        assert!(Config::load(&path).is_err());

        fs::write(&path, r#"{"data_file": "  "}"#).unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_args_override_data_dir() {
        let temp = TempDir::new().unwrap();
        let args = ConfigArgs {
            config: temp.path().join("absent.json"),
            data_dir: Some(temp.path().join("override")),
        };

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.data_dir, temp.path().join("override"));
    }
}
