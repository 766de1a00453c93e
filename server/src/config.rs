// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::path::Path;

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use crate::constants::{ALLOWED_ORIGINS, ENV_PREFIX, SERVER_HOST, SERVER_PORT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    pub port: u16,
    /// Origins granted cross-origin access; `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            ConfigError::Message("Invalid path: contains non-UTF8 characters".to_string())
        })?;

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration with custom file path and environment variable override
    pub fn load_with_env(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::build(config_path, None)
    }

    /// Layer the config file and `SERVER_*` variables. `env` replaces the
    /// process environment when set.
    fn build(
        config_path: Option<&str>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        } else {
            builder = builder
                .add_source(File::with_name("config.yaml").required(false))
                .add_source(File::with_name("config.yml").required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("allowed_origins")
                .source(env),
        );

        builder.build()?.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: SERVER_HOST.to_string(),
            port: SERVER_PORT,
            allowed_origins: ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}
