// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, File, Map};
use greeting_shared::HELLO_PATH;
use serde::Deserialize;

pub const WEB_HOST: &str = "0.0.0.0";
pub const WEB_PORT: u16 = 3001;
const DEV_API_URL: &str = "http://localhost:3000/api/v1";
const PROD_API_URL: &str = "https://app001-backend.fly.dev/api/v1";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Deployment environment; selects the default backend URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn default_api_url(self) -> &'static str {
        match self {
            Environment::Development => DEV_API_URL,
            Environment::Production => PROD_API_URL,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Explicit backend base URL; wins over the environment default
    pub api_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl WebConfig {
    /// Load from an optional YAML file, then `WEB_*` environment variables
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::build(config_path, None)
    }

    /// Load configuration from a YAML file only
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            ConfigError::Message("Invalid path: contains non-UTF8 characters".to_string())
        })?;

        Config::builder()
            .add_source(File::with_name(path_str))
            .build()?
            .try_deserialize()
    }

    fn build(
        config_path: Option<&str>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder
            .add_source(
                config::Environment::with_prefix("WEB")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }

    /// Base URL of the backend API
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| self.environment.default_api_url())
    }

    /// Full URL of the greeting endpoint
    pub fn hello_url(&self) -> String {
        format!("{}{}", self.api_url().trim_end_matches('/'), HELLO_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: WEB_HOST.to_string(),
            port: WEB_PORT,
            environment: Environment::Development,
            api_url: None,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WebConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.api_url(), "http://localhost:3000/api/v1");
        assert_eq!(config.hello_url(), "http://localhost:3000/api/v1/hello");
    }

    #[test]
    fn test_production_switches_api_url() {
        let config = WebConfig {
            environment: Environment::Production,
            ..WebConfig::default()
        };
        assert_eq!(config.api_url(), "https://app001-backend.fly.dev/api/v1");
    }

    #[test]
    fn test_explicit_api_url_wins() {
        let config = WebConfig {
            environment: Environment::Production,
            api_url: Some("http://127.0.0.1:9000/api/v1/".to_string()),
            ..WebConfig::default()
        };
        assert_eq!(config.hello_url(), "http://127.0.0.1:9000/api/v1/hello");
    }

    #[test]
    fn test_config_deserialization() {
        let yaml_content = r#"
port: 4001
environment: production
request_timeout_secs: 2
"#;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("web.yaml");
        fs::write(&file_path, yaml_content).unwrap();

        let config = WebConfig::from_file(file_path).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4001);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let env: Map<String, String> = [
            ("WEB_ENVIRONMENT".to_string(), "production".to_string()),
            ("WEB_PORT".to_string(), "8081".to_string()),
        ]
        .into_iter()
        .collect();

        let config = WebConfig::build(None, Some(env)).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        let env: Map<String, String> = [("WEB_ENVIRONMENT".to_string(), "staging".to_string())]
            .into_iter()
            .collect();

        assert!(WebConfig::build(None, Some(env)).is_err());
    }
}
