use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Validating User Inputs";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no submission endpoint configured (use --endpoint or `endpoint:` in the config file)")]
    MissingEndpoint,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
    pub title: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(raw.as_str(), path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub title: String,
}

impl AppConfig {
    /// Command-line values win over the file. A timeout of 0 means none.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let endpoint = overrides
            .endpoint
            .or(file.endpoint)
            .filter(|endpoint| !endpoint.trim().is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        Ok(Self {
            endpoint,
            timeout: overrides
                .timeout_ms
                .or(file.timeout_ms)
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
            title: file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }

    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DEFAULT_TITLE, FileConfig, Overrides};
    use std::path::Path;
    use std::time::Duration;

    fn parse(raw: &str) -> Result<FileConfig, ConfigError> {
        FileConfig::parse(raw, Path::new("form.yaml"))
    }

    #[test]
    fn parses_yaml_file() {
        let file = parse("endpoint: https://example.test/users\ntimeout_ms: 2500\ntitle: Signup\n")
            .expect("config");
        let config = AppConfig::resolve(file, Overrides::default()).expect("resolve");
        assert_eq!(config.endpoint, "https://example.test/users");
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.title, "Signup");
    }

    #[test]
    fn cli_endpoint_overrides_file() {
        let file = parse("endpoint: https://file.test\n").expect("config");
        let config = AppConfig::resolve(
            file,
            Overrides {
                endpoint: Some("https://cli.test".to_string()),
                timeout_ms: None,
            },
        )
        .expect("resolve");
        assert_eq!(config.endpoint, "https://cli.test");
        assert_eq!(config.timeout, None);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let err = AppConfig::resolve(FileConfig::default(), Overrides::default())
            .expect_err("missing endpoint");
        assert!(matches!(err, ConfigError::MissingEndpoint));

        let file = parse("endpoint: '  '\n").expect("config");
        assert!(AppConfig::resolve(file, Overrides::default()).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("endpont: https://typo.test\n").expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let file = parse("endpoint: https://file.test\ntimeout_ms: 0\n").expect("config");
        let config = AppConfig::resolve(file, Overrides::default()).expect("resolve");
        assert_eq!(config.timeout, None);

        let file = parse("endpoint: https://file.test\ntimeout_ms: 0\n").expect("config");
        let config = AppConfig::resolve(
            file,
            Overrides {
                endpoint: None,
                timeout_ms: Some(1500),
            },
        )
        .expect("resolve");
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }
}
